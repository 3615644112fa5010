//! Methane chain: baseline, project (post-capture) and avoided methane.
//!
//! Quantities are kg CH4 for the reporting period; the avoided credit is
//! g CO2e/MJ of injected biomethane.

use serde::Serialize;

use rngci_core::units::{self, CH4_DENSITY_KG_PER_M3, GRAMS_PER_KG, GWP_CH4};
use rngci_pathway::{DigesterType, EnergyData, FuelProduced, LivestockData};

/// Uncontrolled methane from manure management without any capture system.
///
/// `animals × excretion × days × fractionVS × Bo × MCF × 0.67`. No clamping.
pub fn baseline_methane(livestock: &LivestockData) -> f64 {
    let constants = livestock.livestock_type.constants();
    let mcf = livestock.baseline_system.methane_conversion_factor();

    livestock.number_of_animals
        * constants.excretion_rate
        * livestock.reporting_days
        * livestock.fraction_vs
        * constants.bo
        * mcf
        * CH4_DENSITY_KG_PER_M3
}

/// Residual methane once the digester is in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectMethane {
    /// Baseline methane the digester fails to collect.
    pub uncaptured: f64,
    /// Methane slipping through the upgrading tail gas.
    pub tail_gas: f64,
    pub total: f64,
}

pub fn project_methane(baseline: f64, digester: DigesterType, energy: &EnergyData) -> ProjectMethane {
    let uncaptured = baseline * (1.0 - digester.collection_efficiency());
    let tail_gas =
        units::methane_mass_kg(energy.biomethane_tail_gas_flow, energy.tail_gas_methane_content);

    ProjectMethane {
        uncaptured,
        tail_gas,
        total: uncaptured + tail_gas,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AvoidedMethane {
    /// kg CH4
    pub net_avoided: f64,
    /// Output energy, the denominator of every per-MJ term.
    pub energy_mj: f64,
    /// g CO2e/MJ
    pub credit: f64,
}

pub fn avoided_methane_credit(baseline: f64, project: f64, fuel: &FuelProduced) -> AvoidedMethane {
    let net_avoided = baseline - project;
    let energy_mj = units::mmbtu_to_mj(fuel.biomethane_injected);
    let credit = units::per_mj(net_avoided * GWP_CH4 * GRAMS_PER_KG, energy_mj);

    AvoidedMethane {
        net_avoided,
        energy_mj,
        credit,
    }
}
