//! Emissions calculators and the carbon-intensity aggregator.
//!
//! Every calculator is a free function over plain records; data flows strictly
//! forward: methane chain, energy, transport, then aggregation.

pub mod energy;
pub mod intensity;
pub mod methane;
pub mod transport;

pub use energy::{EnergyEmissions, energy_emissions};
pub use intensity::{CalculationResults, aggregate, calculate};
pub use methane::{
    AvoidedMethane, ProjectMethane, avoided_methane_credit, baseline_methane, project_methane,
};
pub use transport::{TransportEmissions, transport_emissions};
