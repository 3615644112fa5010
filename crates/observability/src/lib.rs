//! Tracing/logging setup shared by every binary in the workspace.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;
