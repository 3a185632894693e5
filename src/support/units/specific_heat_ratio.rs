use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, GreaterThanOne};

/// The ratio of specific heats, `γ = cp/cv`.
///
/// For any physical gas `cp > cv`, so the ratio must be greater than one.
///
/// # Example
///
/// ```
/// use twine_aero::support::units::SpecificHeatRatio;
///
/// let air = SpecificHeatRatio::air();
/// assert_eq!(*air, 1.4);
///
/// let helium = SpecificHeatRatio::new(5.0 / 3.0).unwrap();
/// assert!(*helium > *air);
///
/// assert!(SpecificHeatRatio::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SpecificHeatRatio(Constrained<f64, GreaterThanOne>);

impl SpecificHeatRatio {
    /// Creates a [`SpecificHeatRatio`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not greater than one.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(GreaterThanOne::new(value)?))
    }

    /// The specific heat ratio of dry air treated as a diatomic perfect gas.
    #[must_use]
    pub fn air() -> Self {
        Self(Constrained::new_unchecked(1.4))
    }

    /// Returns the inner value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }
}

impl Default for SpecificHeatRatio {
    fn default() -> Self {
        Self::air()
    }
}

impl Deref for SpecificHeatRatio {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
