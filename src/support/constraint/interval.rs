use std::fmt;

use super::ConstraintError;

/// A closed interval `[lower, upper]` whose bounds are only known at runtime.
///
/// Unlike the marker types, which fix their bounds at compile time, the
/// bounds here usually depend on another input.
/// For example, the density ratio across a normal shock is limited to
/// `1 ≤ ρ₂/ρ₁ ≤ (γ+1)/(γ−1)`.
///
/// # Examples
///
/// ```
/// use twine_aero::support::constraint::{ClosedInterval, ConstraintError};
///
/// let gamma = 1.4;
/// let density_ratio = ClosedInterval::new(1.0, (gamma + 1.0) / (gamma - 1.0));
///
/// assert!(density_ratio.check(3.0).is_ok());
/// assert!(density_ratio.check(1.0).is_ok());
/// assert_eq!(density_ratio.check(6.5), Err(ConstraintError::AboveMaximum));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedInterval {
    lower: f64,
    upper: f64,
}

impl ClosedInterval {
    /// Creates the interval `[lower, upper]`.
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        debug_assert!(lower <= upper, "interval bounds are reversed");
        Self { lower, upper }
    }

    /// Checks that `value` lies within the interval, endpoints included.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than the lower bound.
    /// - [`ConstraintError::AboveMaximum`] if greater than the upper bound.
    /// - [`ConstraintError::NotANumber`] if `value` is `NaN`.
    pub fn check(&self, value: f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value < self.lower {
            Err(ConstraintError::BelowMinimum)
        } else if value > self.upper {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ≤ x ≤ {}", self.lower, self.upper)
    }
}
