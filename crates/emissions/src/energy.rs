//! Energy-related emissions: grid electricity, natural gas, diesel and
//! fugitive methane from upgrading.
//!
//! All terms are g CO2e/MJ and use net stage accounting (digester + upgrading
//! minus baseline), so electricity and diesel may come out negative.

use serde::Serialize;

use rngci_core::units::{self, GRAMS_PER_KG, GWP_CH4};
use rngci_pathway::{BiogasData, ElectricityInfo, EnergyData, FuelProduced};

/// unit: kg CO2e/MMBtu
pub const NATURAL_GAS_EF: f64 = 53.06;

/// unit: kg CO2e/gal
pub const DIESEL_EF: f64 = 10.21;

/// Share of methane routed to upgrading that escapes as fugitive loss.
pub const FUGITIVE_LOSS_RATE: f64 = 0.015;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EnergyEmissions {
    pub electricity: f64,
    pub natural_gas: f64,
    pub diesel: f64,
    pub fugitive: f64,
}

pub fn energy_emissions(
    energy: &EnergyData,
    electricity: &ElectricityInfo,
    biogas: &BiogasData,
    fuel: &FuelProduced,
    energy_mj: f64,
) -> EnergyEmissions {
    let net_grid_kwh = energy.net_electricity() - fuel.electricity_generated;
    let upgraded_methane =
        units::methane_mass_kg(biogas.biogas_to_upgrading, biogas.upgrading_methane_content);

    EnergyEmissions {
        electricity: units::per_mj(net_grid_kwh * electricity.ef_elec, energy_mj),
        natural_gas: units::per_mj(
            energy.net_natural_gas() * NATURAL_GAS_EF * GRAMS_PER_KG,
            energy_mj,
        ),
        diesel: units::per_mj(energy.net_diesel() * DIESEL_EF * GRAMS_PER_KG, energy_mj),
        fugitive: units::per_mj(
            upgraded_methane * FUGITIVE_LOSS_RATE * GWP_CH4 * GRAMS_PER_KG,
            energy_mj,
        ),
    }
}
