//! Unit conversions and physical constants shared by every calculator.
//!
//! One canonical constant set; all per-MJ terms go through [`per_mj`] so the
//! zero-energy guard behaves identically everywhere.

/// Energy content conversion.
/// unit: MJ/MMBtu
pub const MJ_PER_MMBTU: f64 = 1055.06;

/// 100-year global warming potential of methane.
/// unit: kg CO2e / kg CH4
pub const GWP_CH4: f64 = 25.0;

/// Methane density at standard conditions on a cubic-metre basis.
/// unit: kg/m³
pub const CH4_DENSITY_KG_PER_M3: f64 = 0.67;

/// Methane density at standard conditions on a standard-cubic-foot basis.
/// unit: kg/scf
pub const CH4_DENSITY_KG_PER_SCF: f64 = 0.0191;

/// unit: g/kg
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Convert an energy quantity in MMBtu to MJ.
pub fn mmbtu_to_mj(mmbtu: f64) -> f64 {
    mmbtu * MJ_PER_MMBTU
}

/// Mass of methane carried by a gas stream.
///
/// `methane_percent` is on the 0–100 scale.
pub fn methane_mass_kg(flow_scf: f64, methane_percent: f64) -> f64 {
    flow_scf * (methane_percent / 100.0) * CH4_DENSITY_KG_PER_SCF
}

/// Normalize an emission quantity (g CO2e) by the output energy (MJ).
///
/// A non-positive `energy_mj` yields exactly `0.0` instead of NaN/inf.
pub fn per_mj(grams_co2e: f64, energy_mj: f64) -> f64 {
    if energy_mj <= 0.0 {
        return 0.0;
    }
    grams_co2e / energy_mj
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mmbtu_conversion_matches_reference() {
        assert!((mmbtu_to_mj(2300.0) - 2_426_638.0).abs() < 1e-6);
    }

    #[test]
    fn methane_mass_uses_percent_scale() {
        // 75,000 scf at 1.5 % methane
        let kg = methane_mass_kg(75_000.0, 1.5);
        assert!((kg - 21.4875).abs() < 1e-9, "got {kg}");
    }

    #[test]
    fn per_mj_guards_zero_and_negative_energy() {
        assert_eq!(per_mj(1.0e6, 0.0), 0.0);
        assert_eq!(per_mj(-1.0e6, -5.0), 0.0);
        assert_eq!(per_mj(10.0, 4.0), 2.5);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: normalization never produces NaN or infinity for finite input.
        #[test]
        fn per_mj_is_always_finite(
            grams in -1.0e12f64..1.0e12,
            energy in -1.0e9f64..1.0e9,
        ) {
            prop_assert!(per_mj(grams, energy).is_finite());
        }
    }
}
