//! Numeric constraints for flow-relation inputs.
//!
//! Every relation in this crate has a valid domain for its inputs: a specific
//! heat ratio must exceed one, a Mach number can't be negative, a static to
//! stagnation temperature ratio lies in `[0, 1]`, and so on.
//! This module expresses those domains as zero-sized marker types.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1`
//! - [`AtLeastOne`]: One or greater
//! - [`GreaterThanOne`]: Strictly greater than one
//!
//! Each marker implements [`Constraint<T>`] and can be used with the generic
//! [`Constrained<T, C>`] wrapper to carry the invariant at the type level.
//!
//! Some bounds depend on another input (for example, the smallest possible
//! Mach number behind a normal shock depends on the specific heat ratio).
//! Those are checked at runtime with a [`ClosedInterval`].

mod interval;
mod non_negative;
mod one_bounded;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use interval::ClosedInterval;
pub use non_negative::NonNegative;
pub use one_bounded::{AtLeastOne, GreaterThanOne};
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::UnitInterval;

/// A trait for enforcing numeric invariants.
///
/// Implement this trait for any marker type representing a numeric constraint,
/// such as [`NonNegative`] or [`GreaterThanOne`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use twine_aero::support::constraint::{Constrained, GreaterThanOne};
///
/// let gamma = Constrained::<_, GreaterThanOne>::new(1.4).unwrap();
/// assert_eq!(gamma.into_inner(), 1.4);
///
/// assert!(Constrained::<_, GreaterThanOne>::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Wraps a value known to satisfy the constraint.
    ///
    /// The invariant is checked in debug builds.
    pub(crate) fn new_unchecked(value: T) -> Self {
        debug_assert!(C::check(&value).is_ok(), "constraint violated");
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
