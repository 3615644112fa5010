//! `rngci-core`: shared building blocks for the carbon-intensity engine.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the value-record marker and the unit conversions every
//! calculator shares.

pub mod error;
pub mod units;
pub mod value_object;

pub use error::{DomainError, DomainResult, FieldIssue, ValidationError};
pub use value_object::ValueObject;
