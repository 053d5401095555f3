//! Range error types

use std::fmt;

use thiserror::Error;

/// Which bound of a range a validation error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundKind {
    Minimum,
    Maximum,
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundKind::Minimum => f.write_str("minimum"),
            BoundKind::Maximum => f.write_str("maximum"),
        }
    }
}

/// Range-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// A bound is NaN
    #[error("Invalid range: {bound} bound is NaN")]
    NaN { bound: BoundKind },

    /// A bound is infinite
    #[error("Invalid range: {bound} bound is not finite ({value})")]
    NonFinite { bound: BoundKind, value: f64 },

    /// A bound lies before the start of the time axis
    #[error("Invalid range: {bound} bound is negative ({value})")]
    Negative { bound: BoundKind, value: f64 },

    /// Maximum bound is smaller than the minimum bound
    #[error("Invalid range: maximum bound {maximum} < minimum bound {minimum}")]
    Inverted { minimum: f64, maximum: f64 },

    /// Unrecognized axis direction tag
    #[error("Invalid state: unknown axis direction tag {0}")]
    InvalidState(i8),

    /// Unrecognized overflow behavior tag
    #[error("Unimplemented overflow behavior tag {0}")]
    Unimplemented(u8),
}

/// Result type for range operations
pub type Result<T> = std::result::Result<T, RangeError>;
