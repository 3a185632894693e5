use num_complex::Complex64;
use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::Quantity;

/// Errors returned by the flow relations and the atmosphere model.
///
/// Every error is detected before any numeric work starts, so a failed call
/// never produces partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RelationError {
    /// A value lies outside the valid domain of its relation.
    #[error("{quantity} must satisfy {bound}, got {value} at index {index}")]
    Domain {
        quantity: Quantity,
        /// Position of the first offending element in logical (row-major) order.
        index: usize,
        value: f64,
        /// Human-readable description of the violated bound.
        bound: String,
        #[source]
        source: ConstraintError,
    },

    /// A value has a nonzero imaginary part.
    #[error("{quantity} must be real, got {value} at index {index}")]
    NonReal {
        quantity: Quantity,
        index: usize,
        value: Complex64,
    },

    /// Two array inputs have different shapes and neither is a scalar.
    #[error(
        "inputs must have the same shape or one must be a scalar: gamma {gamma:?}, flow {flow:?}"
    )]
    ShapeMismatch { gamma: Vec<usize>, flow: Vec<usize> },

    /// A mode or convention string was not recognized.
    #[error("unrecognized mode {mode:?}, expected one of: {expected}")]
    InvalidMode { mode: String, expected: &'static str },
}
