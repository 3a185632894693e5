//! Input broadcasting and validation shared by all relations.
//!
//! A relation call converts its inputs to [`Field`]s, rejects non-real
//! values, pairs the specific heat ratio with the flow variable through
//! [`broadcast`], and checks each element against the relation's domain.
//! All of this happens before any numeric work, and the first violation is
//! reported as a [`RelationError`].

mod error;
mod quantity;

use ndarray::{ArrayD, Zip};

use crate::support::{
    constraint::{ClosedInterval, Constraint, ConstraintError},
    field::{Field, IntoField, NonRealValue},
};

pub use error::RelationError;
pub use quantity::Quantity;

/// A specific heat ratio field and a flow field with identical shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Broadcast {
    pub gamma: ArrayD<f64>,
    pub flow: ArrayD<f64>,
    /// `true` if both inputs were scalars.
    pub scalar: bool,
}

impl Broadcast {
    /// Wraps values computed from this pair as an output [`Field`].
    #[must_use]
    pub fn output(&self, values: ArrayD<f64>) -> Field {
        Field::from_parts(values, self.scalar)
    }

    /// Applies `f(gamma, flow)` to every element pair.
    pub fn map<T>(&self, f: impl Fn(f64, f64) -> T) -> ArrayD<T> {
        Zip::from(&self.gamma)
            .and(&self.flow)
            .map_collect(|&gamma, &flow| f(gamma, flow))
    }
}

/// Converts an input to a [`Field`], naming `quantity` if it is not real.
///
/// # Errors
///
/// Returns [`RelationError::NonReal`] for the first element with a nonzero
/// imaginary part.
pub fn real(input: impl IntoField, quantity: Quantity) -> Result<Field, RelationError> {
    input
        .into_field()
        .map_err(|NonRealValue { index, value }| RelationError::NonReal {
            quantity,
            index,
            value,
        })
}

/// Checks every element against the constraint `C`.
///
/// `bound` describes the constraint for error messages.
///
/// # Errors
///
/// Returns [`RelationError::Domain`] for the first element that violates `C`.
pub fn each<C: Constraint<f64>>(
    values: &ArrayD<f64>,
    quantity: Quantity,
    bound: &str,
) -> Result<(), RelationError> {
    each_by(values, quantity, bound, |value| C::check(&value))
}

/// Checks every element with a custom `check` function.
///
/// # Errors
///
/// Returns [`RelationError::Domain`] for the first element `check` rejects.
pub fn each_by(
    values: &ArrayD<f64>,
    quantity: Quantity,
    bound: &str,
    check: impl Fn(f64) -> Result<(), ConstraintError>,
) -> Result<(), RelationError> {
    values
        .iter()
        .enumerate()
        .try_for_each(|(index, &value)| {
            check(value).map_err(|source| domain(quantity, index, value, bound.to_owned(), source))
        })
}

/// Checks every element against an interval that depends on the paired
/// specific heat ratio.
///
/// # Errors
///
/// Returns [`RelationError::Domain`] for the first element outside its interval.
pub fn each_within(
    pair: &Broadcast,
    quantity: Quantity,
    interval: impl Fn(f64) -> ClosedInterval,
) -> Result<(), RelationError> {
    pair.flow
        .iter()
        .zip(pair.gamma.iter())
        .enumerate()
        .try_for_each(|(index, (&value, &gamma))| {
            let bounds = interval(gamma);
            bounds
                .check(value)
                .map_err(|source| domain(quantity, index, value, bounds.to_string(), source))
        })
}

/// Pairs a specific heat ratio field with a flow field.
///
/// Fields with equal shapes pass through unchanged.
/// A single-element field (scalar or array) is repeated to the shape of the
/// other; if both hold one element, the shape with more dimensions wins.
///
/// # Errors
///
/// Returns [`RelationError::ShapeMismatch`] if the shapes differ and neither
/// field holds exactly one element.
pub fn broadcast(gamma: Field, flow: Field) -> Result<Broadcast, RelationError> {
    let scalar = gamma.is_scalar() && flow.is_scalar();

    if gamma.shape() == flow.shape() {
        return Ok(Broadcast {
            gamma: gamma.into_values(),
            flow: flow.into_values(),
            scalar,
        });
    }

    let (gamma, flow) = match (single(&gamma), single(&flow)) {
        (Some(g), Some(f)) => {
            let shape = if gamma.shape().len() > flow.shape().len() {
                gamma.shape().to_vec()
            } else {
                flow.shape().to_vec()
            };
            (
                ArrayD::from_elem(shape.clone(), g),
                ArrayD::from_elem(shape, f),
            )
        }
        (Some(g), None) => (ArrayD::from_elem(flow.shape(), g), flow.into_values()),
        (None, Some(f)) => {
            let flow = ArrayD::from_elem(gamma.shape(), f);
            (gamma.into_values(), flow)
        }
        (None, None) => {
            return Err(RelationError::ShapeMismatch {
                gamma: gamma.shape().to_vec(),
                flow: flow.shape().to_vec(),
            });
        }
    };

    Ok(Broadcast {
        gamma,
        flow,
        scalar,
    })
}

fn single(field: &Field) -> Option<f64> {
    if field.len() == 1 {
        field.values().first().copied()
    } else {
        None
    }
}

fn domain(
    quantity: Quantity,
    index: usize,
    value: f64,
    bound: String,
    source: ConstraintError,
) -> RelationError {
    RelationError::Domain {
        quantity,
        index,
        value,
        bound,
        source,
    }
}
