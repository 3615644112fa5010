//! Input records for one reporting period.
//!
//! All records deserialize from camelCase JSON. Missing numeric fields default
//! to zero and missing selectors to their first option, matching how the
//! collection layer hands over partially filled forms.

use serde::{Deserialize, Serialize};

use rngci_core::ValueObject;

use crate::tables::{DigesterType, LivestockCategory, ManureSystem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacilityInfo {
    pub company_name: String,
    pub facility_name: String,
    pub location: String,
    /// Free-form, e.g. `2024-06`.
    pub reporting_month: String,
    pub digester_type: DigesterType,
}

/// Grid electricity context. `gridRegion`, when given, must be a code from
/// [`crate::GRID_REGIONS`]; `efElec` is the factor actually applied and may
/// differ from the table value for site-specific supply contracts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElectricityInfo {
    pub grid_region: String,
    /// unit: g CO2e/kWh
    pub ef_elec: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LivestockData {
    pub livestock_type: LivestockCategory,
    /// Head count; a whole number.
    pub number_of_animals: f64,
    pub baseline_system: ManureSystem,
    pub reporting_days: f64,
    /// Average storage temperature, °C. Recorded, not used by the formulas.
    pub average_temperature: f64,
    /// Fraction of volatile solids sent to anaerobic storage, 0–1 (not a percent).
    #[serde(rename = "fractionVS")]
    pub fraction_vs: f64,
}

/// Monthly biogas stream volumes (scf) and methane content (0–100 %).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BiogasData {
    pub raw_biogas_flow: f64,
    pub raw_methane_content: f64,
    pub flared_biogas_flow: f64,
    pub flared_methane_content: f64,
    pub biogas_to_upgrading: f64,
    pub upgrading_methane_content: f64,
}

/// Monthly energy use by process stage.
///
/// The baseline stage is the consumption that would have happened without the
/// project; net figures subtract it from digester + upgrading use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnergyData {
    /// unit: gal
    pub diesel_baseline: f64,
    pub diesel_digester: f64,
    pub diesel_upgrading: f64,

    /// unit: MMBtu
    pub natural_gas_baseline: f64,
    pub natural_gas_digester: f64,
    pub natural_gas_upgrading: f64,

    /// unit: kWh
    pub electricity_baseline: f64,
    pub electricity_digester: f64,
    pub electricity_upgrading: f64,

    /// unit: scf
    pub biogas_baseline: f64,
    pub biogas_digester: f64,
    pub biogas_upgrading: f64,

    /// unit: scf
    pub biomethane_tail_gas_flow: f64,
    /// unit: % (0–100)
    pub tail_gas_methane_content: f64,
}

impl EnergyData {
    pub fn net_diesel(&self) -> f64 {
        self.diesel_digester + self.diesel_upgrading - self.diesel_baseline
    }

    pub fn net_natural_gas(&self) -> f64 {
        self.natural_gas_digester + self.natural_gas_upgrading - self.natural_gas_baseline
    }

    pub fn net_electricity(&self) -> f64 {
        self.electricity_digester + self.electricity_upgrading - self.electricity_baseline
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FuelProduced {
    /// Energy injected to the pipeline; the per-MJ denominator.
    /// unit: MMBtu
    pub biomethane_injected: f64,
    /// On-site generation exported or self-consumed; offsets grid electricity.
    /// unit: kWh
    pub electricity_generated: f64,
    /// unit: miles
    #[serde(rename = "distanceToCNG")]
    pub distance_to_cng: f64,
    /// unit: % (0–100)
    #[serde(rename = "percentCNGtoLNG")]
    pub percent_cng_to_lng: f64,
}

/// The six records of one calculation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathwayInputs {
    pub facility_info: FacilityInfo,
    pub electricity_info: ElectricityInfo,
    pub livestock_data: LivestockData,
    pub biogas_data: BiogasData,
    pub energy_data: EnergyData,
    pub fuel_produced: FuelProduced,
}

impl ValueObject for FacilityInfo {}
impl ValueObject for ElectricityInfo {}
impl ValueObject for LivestockData {}
impl ValueObject for BiogasData {}
impl ValueObject for EnergyData {}
impl ValueObject for FuelProduced {}
impl ValueObject for PathwayInputs {}
