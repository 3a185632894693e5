//! Compressible-flow relations for a calorically perfect gas.
//!
//! Both relations follow the same pattern: the caller picks an input mode,
//! the relation validates and broadcasts the inputs, resolves the Mach number
//! (directly or by inverting one of the forward relations), and then
//! evaluates every forward relation from that Mach number.

pub mod isentropic;
pub mod normal_shock;

use crate::support::{
    constraint::GreaterThanOne,
    field::{Field, IntoField},
    validate::{self, Broadcast, Quantity, RelationError},
};

/// Input to the flow relation [models](twine_core::Model): a specific heat
/// ratio field and a flow variable field.
///
/// The meaning of `flow` is set by the model's input mode.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowInput {
    pub gamma: Field,
    pub flow: Field,
}

impl FlowInput {
    #[must_use]
    pub fn new(gamma: Field, flow: Field) -> Self {
        Self { gamma, flow }
    }
}

/// Validates the specific heat ratio and pairs it with the flow variable.
///
/// Checks run in a fixed order: the specific heat ratio is checked for
/// realness and `γ > 1`, then the flow variable for realness, then shape
/// compatibility.
/// Domain checks on the flow variable are left to the caller, since they
/// depend on the input mode.
fn sample(
    gamma: impl IntoField,
    flow: impl IntoField,
    flow_quantity: Quantity,
) -> Result<Broadcast, RelationError> {
    let gamma = validate::real(gamma, Quantity::SpecificHeatRatio)?;
    validate::each::<GreaterThanOne>(gamma.values(), Quantity::SpecificHeatRatio, "x > 1")?;

    let flow = validate::real(flow, flow_quantity)?;

    validate::broadcast(gamma, flow)
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;
    use num_complex::Complex64;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn gamma_must_exceed_one() {
        let err = sample(1.0_f64, 2.0_f64, Quantity::MachNumber).unwrap_err();
        assert!(matches!(
            err,
            RelationError::Domain {
                quantity: Quantity::SpecificHeatRatio,
                source: ConstraintError::BelowMinimum,
                ..
            }
        ));
    }

    #[test]
    fn gamma_is_checked_before_flow_realness() {
        let err = sample(0.5_f64, Complex64::new(2.0, 1.0), Quantity::AreaRatio).unwrap_err();
        assert!(matches!(
            err,
            RelationError::Domain {
                quantity: Quantity::SpecificHeatRatio,
                source: ConstraintError::BelowMinimum,
                ..
            }
        ));

        let err = sample(1.4_f64, Complex64::new(2.0, 1.0), Quantity::AreaRatio).unwrap_err();
        assert!(matches!(
            err,
            RelationError::NonReal {
                quantity: Quantity::AreaRatio,
                ..
            }
        ));
    }

    #[test]
    fn shapes_are_checked_after_gamma() {
        let err = sample(
            array![1.4_f64, 1.3],
            array![1.0_f64, 2.0, 3.0],
            Quantity::MachNumber,
        )
        .unwrap_err();
        assert!(matches!(err, RelationError::ShapeMismatch { .. }));
    }
}
