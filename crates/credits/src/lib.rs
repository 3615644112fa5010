//! Clean-fuel production tax credit derived from a carbon-intensity score.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod tax_credit;

pub use tax_credit::{
    BASE_RATE_TABLE, CI_THRESHOLD, FuelType, TaxCreditPolicy, TaxCreditResult, calculate_tax_credit,
};
