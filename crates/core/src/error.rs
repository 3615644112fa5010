//! Domain error model.

use serde::Serialize;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The calculators themselves never fail for well-typed numeric input; these
/// errors come from the layers in front of them (validation, lookups).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// One or more input fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A grid-mix identifier was not present in the regional table.
    #[error("unknown grid region: {0}")]
    UnknownGridRegion(String),
}

impl DomainError {
    pub fn unknown_grid_region(code: impl Into<String>) -> Self {
        Self::UnknownGridRegion(code.into())
    }
}

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Dotted JSON path of the field, e.g. `livestockData.numberOfAnimals`.
    pub field: String,
    pub message: String,
}

/// Every offending field found while validating one calculation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("validation failed for {}", fields_summary(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(FieldIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns `Ok(())` when no issue was recorded.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().map(|i| i.field.as_str())
    }
}

fn fields_summary(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| i.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
