//! Transport to distribution and end-use (tailpipe) combustion.

use serde::Serialize;

use rngci_core::units;
use rngci_pathway::FuelProduced;

/// unit: g CO2e/mile
pub const TRANSPORT_EF_PER_MILE: f64 = 1690.0;

/// unit: g CO2e/MJ
pub const TAILPIPE_BASE: f64 = 1.0;

/// Added to the tailpipe term at 100 % LNG conversion.
/// unit: g CO2e/MJ
pub const LNG_CONVERSION_FACTOR: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransportEmissions {
    pub transport: f64,
    pub tailpipe: f64,
}

pub fn transport_emissions(fuel: &FuelProduced, energy_mj: f64) -> TransportEmissions {
    let transport = units::per_mj(fuel.distance_to_cng * TRANSPORT_EF_PER_MILE, energy_mj);

    // Not divided by energy_mj, unlike every sibling term. Kept as-is pending
    // product-owner review of the intended normalization.
    let tailpipe = TAILPIPE_BASE + fuel.percent_cng_to_lng / 100.0 * LNG_CONVERSION_FACTOR;

    TransportEmissions {
        transport,
        tailpipe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fuel(distance: f64, lng_pct: f64) -> FuelProduced {
        FuelProduced {
            biomethane_injected: 2300.0,
            distance_to_cng: distance,
            percent_cng_to_lng: lng_pct,
            ..FuelProduced::default()
        }
    }

    #[test]
    fn tailpipe_includes_lng_penalty() {
        let t = transport_emissions(&fuel(0.0, 15.0), 2_426_638.0);
        assert!((t.tailpipe - 2.5).abs() < 1e-12);

        let t = transport_emissions(&fuel(0.0, 0.0), 2_426_638.0);
        assert_eq!(t.tailpipe, TAILPIPE_BASE);
    }

    #[test]
    fn tailpipe_ignores_output_energy() {
        let a = transport_emissions(&fuel(10.0, 40.0), 1.0);
        let b = transport_emissions(&fuel(10.0, 40.0), 0.0);
        assert_eq!(a.tailpipe, b.tailpipe);
        assert_eq!(b.transport, 0.0);
    }

    #[test]
    fn transport_scales_with_distance() {
        let t = transport_emissions(&fuel(100.0, 0.0), 169_000.0);
        assert!((t.transport - 1.0).abs() < 1e-12);
    }
}
