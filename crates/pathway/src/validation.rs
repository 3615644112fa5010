//! Validation layer in front of the calculators.
//!
//! The calculators never fail; this is where malformed input is rejected. All
//! offending fields are collected, not just the first one.
//!
//! Quantities are capped at [`MAX_QUANTITY`] and a non-zero output energy must
//! reach [`MIN_OUTPUT_ENERGY`], which keeps every result term finite.

use rngci_core::ValidationError;

use crate::grid::grid_region;
use crate::records::{
    BiogasData, ElectricityInfo, EnergyData, FuelProduced, LivestockData, PathwayInputs,
};

/// Upper bound for any count, flow, consumption, distance or factor.
pub const MAX_QUANTITY: f64 = 1e12;

/// Smallest non-zero `biomethaneInjected` accepted.
/// unit: MMBtu
pub const MIN_OUTPUT_ENERGY: f64 = 1e-6;

/// Validate a full calculation request.
pub fn validate(inputs: &PathwayInputs) -> Result<(), ValidationError> {
    let mut errors = ValidationError::new();

    validate_electricity(&inputs.electricity_info, &mut errors);
    validate_livestock(&inputs.livestock_data, &mut errors);
    validate_biogas(&inputs.biogas_data, &mut errors);
    validate_energy(&inputs.energy_data, &mut errors);
    validate_fuel(&inputs.fuel_produced, &mut errors);

    errors.into_result()
}

/// Records issues under a JSON path prefix.
pub struct FieldChecker<'a> {
    prefix: &'static str,
    errors: &'a mut ValidationError,
}

impl<'a> FieldChecker<'a> {
    pub fn new(prefix: &'static str, errors: &'a mut ValidationError) -> Self {
        Self { prefix, errors }
    }

    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(format!("{}.{}", self.prefix, field), message);
    }

    /// Returns false (and records an issue) for NaN/inf.
    fn finite(&mut self, field: &str, value: f64) -> bool {
        if value.is_finite() {
            true
        } else {
            self.reject(field, "must be a finite number");
            false
        }
    }

    fn bounded(&mut self, field: &str, value: f64) {
        if value > MAX_QUANTITY {
            self.reject(field, format!("must be <= {MAX_QUANTITY:e} (got {value:e})"));
        }
    }

    pub fn non_negative(&mut self, field: &str, value: f64) {
        if !self.finite(field, value) {
            return;
        }
        if value < 0.0 {
            self.reject(field, format!("must be >= 0 (got {value})"));
        } else {
            self.bounded(field, value);
        }
    }

    pub fn positive(&mut self, field: &str, value: f64) {
        if !self.finite(field, value) {
            return;
        }
        if value <= 0.0 {
            self.reject(field, format!("must be > 0 (got {value})"));
        } else {
            self.bounded(field, value);
        }
    }

    /// Zero, or a value in `MIN_OUTPUT_ENERGY..=MAX_QUANTITY`.
    pub fn output_energy(&mut self, field: &str, value: f64) {
        if !self.finite(field, value) {
            return;
        }
        if value < 0.0 {
            self.reject(field, format!("must be >= 0 (got {value})"));
        } else if value > 0.0 && value < MIN_OUTPUT_ENERGY {
            self.reject(
                field,
                format!("must be 0 or at least {MIN_OUTPUT_ENERGY:e} (got {value:e})"),
            );
        } else {
            self.bounded(field, value);
        }
    }

    pub fn percent(&mut self, field: &str, value: f64) {
        if self.finite(field, value) && !(0.0..=100.0).contains(&value) {
            self.reject(field, format!("must be a percentage within 0..=100 (got {value})"));
        }
    }

    pub fn fraction(&mut self, field: &str, value: f64) {
        if self.finite(field, value) && !(0.0..=1.0).contains(&value) {
            self.reject(field, format!("must be a fraction within 0..=1 (got {value})"));
        }
    }

    pub fn whole_count(&mut self, field: &str, value: f64) {
        if !self.finite(field, value) {
            return;
        }
        if value < 0.0 {
            self.reject(field, format!("must be >= 0 (got {value})"));
        } else if value.fract() != 0.0 {
            self.reject(field, format!("must be a whole number (got {value})"));
        } else {
            self.bounded(field, value);
        }
    }

    pub fn finite_only(&mut self, field: &str, value: f64) {
        self.finite(field, value);
    }
}

fn validate_electricity(info: &ElectricityInfo, errors: &mut ValidationError) {
    let mut c = FieldChecker::new("electricityInfo", errors);
    // Empty means "not stated"; efElec is taken as supplied either way.
    if !info.grid_region.trim().is_empty() {
        if let Err(err) = grid_region(&info.grid_region) {
            c.reject("gridRegion", err.to_string());
        }
    }
    c.non_negative("efElec", info.ef_elec);
}

fn validate_livestock(data: &LivestockData, errors: &mut ValidationError) {
    let mut c = FieldChecker::new("livestockData", errors);
    c.whole_count("numberOfAnimals", data.number_of_animals);
    c.positive("reportingDays", data.reporting_days);
    c.finite_only("averageTemperature", data.average_temperature);
    c.fraction("fractionVS", data.fraction_vs);
}

fn validate_biogas(data: &BiogasData, errors: &mut ValidationError) {
    let mut c = FieldChecker::new("biogasData", errors);
    c.non_negative("rawBiogasFlow", data.raw_biogas_flow);
    c.percent("rawMethaneContent", data.raw_methane_content);
    c.non_negative("flaredBiogasFlow", data.flared_biogas_flow);
    c.percent("flaredMethaneContent", data.flared_methane_content);
    c.non_negative("biogasToUpgrading", data.biogas_to_upgrading);
    c.percent("upgradingMethaneContent", data.upgrading_methane_content);
}

fn validate_energy(data: &EnergyData, errors: &mut ValidationError) {
    let mut c = FieldChecker::new("energyData", errors);
    let quantities = [
        ("dieselBaseline", data.diesel_baseline),
        ("dieselDigester", data.diesel_digester),
        ("dieselUpgrading", data.diesel_upgrading),
        ("naturalGasBaseline", data.natural_gas_baseline),
        ("naturalGasDigester", data.natural_gas_digester),
        ("naturalGasUpgrading", data.natural_gas_upgrading),
        ("electricityBaseline", data.electricity_baseline),
        ("electricityDigester", data.electricity_digester),
        ("electricityUpgrading", data.electricity_upgrading),
        ("biogasBaseline", data.biogas_baseline),
        ("biogasDigester", data.biogas_digester),
        ("biogasUpgrading", data.biogas_upgrading),
        ("biomethaneTailGasFlow", data.biomethane_tail_gas_flow),
    ];
    for (field, value) in quantities {
        c.non_negative(field, value);
    }
    c.percent("tailGasMethaneContent", data.tail_gas_methane_content);
}

fn validate_fuel(data: &FuelProduced, errors: &mut ValidationError) {
    let mut c = FieldChecker::new("fuelProduced", errors);
    // Zero is allowed: the calculators short-circuit per-MJ terms to 0.
    c.output_energy("biomethaneInjected", data.biomethane_injected);
    c.non_negative("electricityGenerated", data.electricity_generated);
    c.non_negative("distanceToCNG", data.distance_to_cng);
    c.percent("percentCNGtoLNG", data.percent_cng_to_lng);
}
