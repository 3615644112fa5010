//! Value record trait: equality by value, not identity.
//!
//! Every input and output record of the engine is a value record. It has **no
//! identity**, is built once per calculation and is discarded afterwards.

/// Marker trait for value records.
///
/// ## Immutability
///
/// Records are never mutated after construction. To "change" one, build a new
/// one (struct-update syntax works well for this in tests).
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: records are plain data and cheap to copy
/// - **PartialEq**: records compare by their attribute values
/// - **Debug**: records show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct FuelProduced {
///     biomethane_injected: f64,
/// }
///
/// impl ValueObject for FuelProduced {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
