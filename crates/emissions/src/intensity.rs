//! Carbon-intensity aggregation and the full pipeline entry point.

use serde::{Deserialize, Serialize};

use rngci_core::ValueObject;
use rngci_pathway::PathwayInputs;

use crate::energy::{EnergyEmissions, energy_emissions};
use crate::methane::{
    AvoidedMethane, ProjectMethane, avoided_methane_credit, baseline_methane, project_methane,
};
use crate::transport::{TransportEmissions, transport_emissions};

/// Output of one calculation: every intermediate value plus the final CI.
///
/// Methane quantities are kg CH4; emission terms and the CI are g CO2e/MJ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResults {
    pub baseline_methane_emissions: f64,
    pub uncaptured_methane: f64,
    pub tail_gas_methane: f64,
    pub project_methane_emissions: f64,
    pub net_methane_avoided: f64,
    /// unit: MJ
    pub energy_mj: f64,
    pub avoided_methane_credit: f64,
    pub electricity_emissions: f64,
    pub natural_gas_emissions: f64,
    pub diesel_emissions: f64,
    pub fugitive_emissions: f64,
    pub transport_emissions: f64,
    pub tailpipe_emissions: f64,
    pub total_carbon_intensity: f64,
}

impl ValueObject for CalculationResults {}

impl CalculationResults {
    /// Sum of every positive-direction emission term (before the credit).
    pub fn gross_emissions(&self) -> f64 {
        self.electricity_emissions
            + self.natural_gas_emissions
            + self.diesel_emissions
            + self.fugitive_emissions
            + self.transport_emissions
            + self.tailpipe_emissions
    }
}

/// Package every term and compute `gross emissions − avoided credit`.
pub fn aggregate(
    baseline: f64,
    project: &ProjectMethane,
    avoided: &AvoidedMethane,
    energy: &EnergyEmissions,
    transport: &TransportEmissions,
) -> CalculationResults {
    let gross = energy.electricity
        + energy.natural_gas
        + energy.diesel
        + energy.fugitive
        + transport.transport
        + transport.tailpipe;

    CalculationResults {
        baseline_methane_emissions: baseline,
        uncaptured_methane: project.uncaptured,
        tail_gas_methane: project.tail_gas,
        project_methane_emissions: project.total,
        net_methane_avoided: avoided.net_avoided,
        energy_mj: avoided.energy_mj,
        avoided_methane_credit: avoided.credit,
        electricity_emissions: energy.electricity,
        natural_gas_emissions: energy.natural_gas,
        diesel_emissions: energy.diesel,
        fugitive_emissions: energy.fugitive,
        transport_emissions: transport.transport,
        tailpipe_emissions: transport.tailpipe,
        total_carbon_intensity: gross - avoided.credit,
    }
}

/// Run the whole pipeline over one set of pathway inputs.
///
/// Inputs are expected to have passed [`rngci_pathway::validate`]; this function
/// itself never fails.
pub fn calculate(inputs: &PathwayInputs) -> CalculationResults {
    let baseline = baseline_methane(&inputs.livestock_data);
    let project = project_methane(
        baseline,
        inputs.facility_info.digester_type,
        &inputs.energy_data,
    );
    let avoided = avoided_methane_credit(baseline, project.total, &inputs.fuel_produced);

    let energy = energy_emissions(
        &inputs.energy_data,
        &inputs.electricity_info,
        &inputs.biogas_data,
        &inputs.fuel_produced,
        avoided.energy_mj,
    );
    let transport = transport_emissions(&inputs.fuel_produced, avoided.energy_mj);

    let results = aggregate(baseline, &project, &avoided, &energy, &transport);

    tracing::debug!(
        facility = %inputs.facility_info.facility_name,
        baseline_kg = results.baseline_methane_emissions,
        avoided_credit = results.avoided_methane_credit,
        total_ci = results.total_carbon_intensity,
        "carbon intensity calculated"
    );

    results
}
