//! Normal shock relations.
//!
//! Given one known quantity, [`normal_shock_relations`] returns the upstream
//! and downstream Mach numbers and the property ratios across a stationary
//! normal shock.
//!
//! The known quantity is selected by [`NormalShockMode`]:
//!
//! | Mode | Input | Valid range |
//! |------|-------|-------------|
//! | `mach` | `M₁` | `x ≥ 1` |
//! | `down` | `M₂` | `sqrt((γ−1)/(2γ)) ≤ x ≤ 1` |
//! | `pres` | `p₂/p₁` | `x ≥ 1` |
//! | `dens` | `ρ₂/ρ₁` | `1 ≤ x ≤ (γ+1)/(γ−1)` |
//!
//! The lower bound of `down` and the upper bound of `dens` are the limits of
//! an infinitely strong shock.
//! Both map to `M₁ = ∞`, and the remaining ratios are reported at their
//! limiting values: the static temperature, static pressure, and pitot
//! ratios are infinite and the total pressure ratio is zero.

mod forward;
mod inverse;
mod mode;

use ndarray::{ArrayD, Zip};
use twine_core::Model;

use crate::support::{
    constraint::{AtLeastOne, ClosedInterval},
    field::{Field, IntoField},
    validate::{self, Broadcast, RelationError},
};

use super::{FlowInput, sample};

pub use mode::NormalShockMode;

/// The full set of normal shock quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalShockRelations {
    /// Upstream Mach number, `M₁`.
    pub mach: Field,
    /// Downstream Mach number, `M₂`.
    pub downstream_mach: Field,
    /// Static temperature ratio, `T₂/T₁`.
    pub temperature: Field,
    /// Static pressure ratio, `p₂/p₁`.
    pub pressure: Field,
    /// Density ratio, `ρ₂/ρ₁`.
    pub density: Field,
    /// Total pressure ratio, `p₀₂/p₀₁`.
    pub total_pressure: Field,
    /// Pitot pressure ratio, `p₀₂/p₁`, as measured by a pitot tube behind the
    /// shock.
    pub pitot_pressure: Field,
}

/// Evaluates the normal shock relations from a known quantity named by `mode`.
///
/// # Errors
///
/// Returns [`RelationError::InvalidMode`] for an unrecognized mode, and
/// otherwise fails as [`solve`] does.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use twine_aero::models::flow::normal_shock::normal_shock_relations;
///
/// let shock = normal_shock_relations(1.4, 4.5, "pres").unwrap();
///
/// assert_relative_eq!(shock.mach.as_scalar().unwrap(), 2.0, max_relative = 1e-12);
/// let total_pressure = shock.total_pressure.as_scalar().unwrap();
/// assert_relative_eq!(total_pressure, 0.720_873_861_484_745_5, max_relative = 1e-12);
/// ```
pub fn normal_shock_relations(
    gamma: impl IntoField,
    flow: impl IntoField,
    mode: &str,
) -> Result<NormalShockRelations, RelationError> {
    solve(gamma, flow, mode.parse()?)
}

/// Evaluates the normal shock relations with a typed mode.
///
/// # Errors
///
/// Returns a [`RelationError`] if any input is non-real, `γ ≤ 1`, the shapes
/// don't broadcast, or `flow` lies outside the domain of `mode`.
pub fn solve(
    gamma: impl IntoField,
    flow: impl IntoField,
    mode: NormalShockMode,
) -> Result<NormalShockRelations, RelationError> {
    let pair = sample(gamma, flow, mode.quantity())?;
    check_domain(&pair, mode)?;

    let mach = match mode {
        NormalShockMode::Mach => pair.flow.clone(),
        NormalShockMode::DownstreamMach => pair.map(inverse::from_downstream_mach),
        NormalShockMode::Pressure => pair.map(inverse::from_pressure),
        NormalShockMode::Density => pair.map(inverse::from_density),
    };

    Ok(evaluate(&pair, mach))
}

fn check_domain(pair: &Broadcast, mode: NormalShockMode) -> Result<(), RelationError> {
    let quantity = mode.quantity();
    match mode {
        NormalShockMode::Mach | NormalShockMode::Pressure => {
            validate::each::<AtLeastOne>(&pair.flow, quantity, "x ≥ 1")
        }
        NormalShockMode::DownstreamMach => validate::each_within(pair, quantity, |gamma| {
            ClosedInterval::new(strong_shock_downstream_mach(gamma), 1.0)
        }),
        NormalShockMode::Density => validate::each_within(pair, quantity, |gamma| {
            ClosedInterval::new(1.0, strongest_density_ratio(gamma))
        }),
    }
}

fn evaluate(pair: &Broadcast, mach: ArrayD<f64>) -> NormalShockRelations {
    let jumps = Zip::from(&pair.gamma)
        .and(&mach)
        .map_collect(|&gamma, &mach| forward::jump(gamma, mach));

    NormalShockRelations {
        downstream_mach: pair.output(jumps.map(|j| j.downstream_mach)),
        temperature: pair.output(jumps.map(|j| j.temperature)),
        pressure: pair.output(jumps.map(|j| j.pressure)),
        density: pair.output(jumps.map(|j| j.density)),
        total_pressure: pair.output(jumps.map(|j| j.total_pressure)),
        pitot_pressure: pair.output(jumps.map(|j| j.pitot_pressure)),
        mach: pair.output(mach),
    }
}

/// The downstream Mach number behind an infinitely strong shock.
fn strong_shock_downstream_mach(gamma: f64) -> f64 {
    ((gamma - 1.0) / (2.0 * gamma)).sqrt()
}

/// The density ratio across an infinitely strong shock.
fn strongest_density_ratio(gamma: f64) -> f64 {
    (gamma + 1.0) / (gamma - 1.0)
}

/// Normal shock relations as a [`Model`] with a fixed input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalShock {
    mode: NormalShockMode,
}

impl NormalShock {
    #[must_use]
    pub fn new(mode: NormalShockMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> NormalShockMode {
        self.mode
    }
}

impl Model for NormalShock {
    type Input = FlowInput;
    type Output = NormalShockRelations;
    type Error = RelationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve(&input.gamma, &input.flow, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    use crate::support::{constraint::ConstraintError, validate::Quantity};

    fn scalar(field: &Field) -> f64 {
        field.as_scalar().expect("scalar output")
    }

    #[test]
    fn mach_two_in_air() {
        let s = normal_shock_relations(1.4, 2.0, "mach").unwrap();

        assert_relative_eq!(scalar(&s.mach), 2.0);
        assert_relative_eq!(
            scalar(&s.downstream_mach),
            0.577_350_269_189_625_7,
            max_relative = 1e-12,
        );
        assert_relative_eq!(scalar(&s.temperature), 1.6875, max_relative = 1e-12);
        assert_relative_eq!(scalar(&s.pressure), 4.5, max_relative = 1e-12);
        assert_relative_eq!(scalar(&s.density), 2.666_666_666_666_667, max_relative = 1e-12);
        assert_relative_eq!(
            scalar(&s.total_pressure),
            0.720_873_861_484_745_5,
            max_relative = 1e-12,
        );
        assert_relative_eq!(scalar(&s.pitot_pressure), 5.640_440_812_823_316, max_relative = 1e-12);
    }

    #[test]
    fn every_mode_round_trips() {
        let gamma = array![1.2, 1.3, 1.4, 1.67];

        for mach in [1.2, 2.0, 3.0, 5.0] {
            let forward = normal_shock_relations(gamma.clone(), mach, "mach").unwrap();

            for (mode, field) in [
                ("down", &forward.downstream_mach),
                ("pres", &forward.pressure),
                ("dens", &forward.density),
            ] {
                let inverse = normal_shock_relations(gamma.clone(), field, mode).unwrap();
                for m in inverse.mach.iter() {
                    assert_relative_eq!(m, mach, max_relative = 1e-10);
                }
            }
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn strong_shock_bounds_give_limiting_values() {
        let gamma = 1.4;

        let s = normal_shock_relations(gamma, strong_shock_downstream_mach(gamma), "down").unwrap();
        assert_eq!(scalar(&s.mach), f64::INFINITY);
        assert_eq!(scalar(&s.pressure), f64::INFINITY);
        assert_eq!(scalar(&s.temperature), f64::INFINITY);
        assert_eq!(scalar(&s.pitot_pressure), f64::INFINITY);
        assert_eq!(scalar(&s.total_pressure), 0.0);
        assert_eq!(scalar(&s.density), strongest_density_ratio(gamma));

        let s = normal_shock_relations(gamma, strongest_density_ratio(gamma), "dens").unwrap();
        assert_eq!(scalar(&s.mach), f64::INFINITY);
        assert_eq!(scalar(&s.downstream_mach), strong_shock_downstream_mach(gamma));
    }

    #[test]
    fn array_inputs_keep_their_shape() {
        let s = normal_shock_relations(array![[1.3, 1.4], [1.5, 1.67]], 2.0, "mach").unwrap();
        for field in [
            &s.mach,
            &s.downstream_mach,
            &s.temperature,
            &s.pressure,
            &s.density,
            &s.total_pressure,
            &s.pitot_pressure,
        ] {
            assert_eq!(field.shape(), &[2, 2]);
            assert!(!field.is_scalar());
        }
    }

    #[test]
    fn subsonic_upstream_mach_is_rejected() {
        let err = normal_shock_relations(1.4, 0.8, "mach").unwrap_err();
        assert!(matches!(
            err,
            RelationError::Domain {
                quantity: Quantity::MachNumber,
                source: ConstraintError::BelowMinimum,
                ..
            }
        ));
    }

    #[test]
    fn downstream_mach_bounds_depend_on_gamma() {
        // 0.4 is above the bound for air but below it for γ = 1.67.
        assert!(normal_shock_relations(1.4, 0.4, "down").is_ok());

        let err = normal_shock_relations(array![1.4, 1.67], 0.4, "down").unwrap_err();
        assert!(matches!(
            err,
            RelationError::Domain {
                quantity: Quantity::DownstreamMachNumber,
                index: 1,
                source: ConstraintError::BelowMinimum,
                ..
            }
        ));

        let err = normal_shock_relations(1.4, 1.01, "down").unwrap_err();
        assert!(matches!(
            err,
            RelationError::Domain {
                source: ConstraintError::AboveMaximum,
                ..
            }
        ));
    }

    #[test]
    fn density_ratio_above_strong_limit_is_rejected() {
        let err = normal_shock_relations(1.4, 6.5, "dens").unwrap_err();
        assert!(matches!(
            err,
            RelationError::Domain {
                quantity: Quantity::DensityRatio,
                source: ConstraintError::AboveMaximum,
                ..
            }
        ));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = normal_shock_relations(1.4, 2.0, "sub").unwrap_err();
        assert!(matches!(err, RelationError::InvalidMode { .. }));
    }

    #[test]
    fn model_uses_its_mode() {
        let model = NormalShock::new(NormalShockMode::Density);
        let input = FlowInput::new(Field::scalar(1.4), Field::from_array(array![1.0, 2.0]));

        let output = model.call(&input).unwrap();
        let mach: Vec<f64> = output.mach.iter().collect();
        assert_relative_eq!(mach[0], 1.0);
        assert_relative_eq!(mach[1], 1.581_138_830_084_189_8, max_relative = 1e-12);
    }
}
