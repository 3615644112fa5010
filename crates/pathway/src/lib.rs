//! Pathway inputs: the measurement records a CI calculation consumes.
//!
//! Pure domain data only: records, fixed lookup tables and the validation layer
//! that sits in front of the calculators. No IO, no HTTP.

pub mod grid;
pub mod records;
pub mod tables;
pub mod validation;

pub use grid::{GRID_REGIONS, GridRegion, grid_region};
pub use records::{
    BiogasData, ElectricityInfo, EnergyData, FacilityInfo, FuelProduced, LivestockData,
    PathwayInputs,
};
pub use tables::{
    DigesterType, LivestockCategory, LivestockConstants, ManureSystem, DIGESTER_TABLE,
    LIVESTOCK_TABLE, MANURE_SYSTEM_TABLE,
};
pub use validation::{MAX_QUANTITY, MIN_OUTPUT_ENERGY, validate};
