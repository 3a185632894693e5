use std::cmp::Ordering;

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is one or greater: `x ≥ 1`.
///
/// Area ratios (`A/A*`), normal-shock upstream Mach numbers, and normal-shock
/// static pressure ratios all satisfy this bound.
///
/// # Examples
///
/// ```
/// use twine_aero::support::constraint::AtLeastOne;
///
/// assert!(AtLeastOne::new(1.0).is_ok());
/// assert!(AtLeastOne::new(4.23).is_ok());
/// assert!(AtLeastOne::new(0.99).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AtLeastOne;

impl AtLeastOne {
    /// Constructs a [`Constrained<T, AtLeastOne>`] if the value is at least one.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is less than one or not a number (`NaN`).
    pub fn new<T: PartialOrd + One>(
        value: T,
    ) -> Result<Constrained<T, AtLeastOne>, ConstraintError> {
        Constrained::<T, AtLeastOne>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for AtLeastOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker type enforcing that a value is strictly greater than one: `x > 1`.
///
/// This is the domain of the specific heat ratio `γ = cp/cv`.
///
/// # Examples
///
/// ```
/// use twine_aero::support::constraint::GreaterThanOne;
///
/// assert!(GreaterThanOne::new(1.4).is_ok());
/// assert!(GreaterThanOne::new(1.0).is_err());
/// assert!(GreaterThanOne::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GreaterThanOne;

impl GreaterThanOne {
    /// Constructs a [`Constrained<T, GreaterThanOne>`] if the value exceeds one.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is one or less, or not a number (`NaN`).
    pub fn new<T: PartialOrd + One>(
        value: T,
    ) -> Result<Constrained<T, GreaterThanOne>, ConstraintError> {
        Constrained::<T, GreaterThanOne>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for GreaterThanOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Less | Ordering::Equal) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
