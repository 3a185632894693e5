//! Isentropic flow relations.
//!
//! Given one known quantity, [`isentropic_relations`] returns the Mach number,
//! the static to stagnation temperature, pressure, and density ratios, and the
//! ratio of the local area to the sonic throat area.
//!
//! The known quantity is selected by [`IsentropicMode`]:
//!
//! | Mode | Input | Valid range |
//! |------|-------|-------------|
//! | `mach` | Mach number | `M ≥ 0` |
//! | `temp` | `T/T₀` | `0 ≤ x ≤ 1` |
//! | `pres` | `p/p₀` | `0 ≤ x ≤ 1` |
//! | `dens` | `ρ/ρ₀` | `0 ≤ x ≤ 1` |
//! | `sub`, `sup` | `A/A*` | `x ≥ 1` |
//!
//! A zero static to stagnation ratio corresponds to `M = ∞`, where the area
//! ratio is reported as zero.
//! The area ratio modes are solved iteratively; see [`mach_from_area_ratio`]
//! for the solver and its diagnostics.
//!
//! # Example
//!
//! ```
//! use approx::assert_relative_eq;
//! use twine_aero::models::flow::isentropic::isentropic_relations;
//!
//! let r = isentropic_relations(1.4, 1.6, "sup").unwrap();
//!
//! assert_relative_eq!(r.mach.as_scalar().unwrap(), 1.935_257_607_818_212, max_relative = 1e-12);
//! let pressure = r.pressure.as_scalar().unwrap();
//! assert_relative_eq!(pressure, 0.141_317_868_524_708, max_relative = 1e-10);
//! ```

mod area_ratio;
mod forward;
mod inverse;
mod mode;

use ndarray::{ArrayD, Zip};
use twine_core::Model;

use crate::support::{
    constraint::{NonNegative, UnitInterval},
    field::{Field, IntoField},
    validate::{self, Broadcast, RelationError},
};

use super::{FlowInput, sample};

pub use area_ratio::{
    AreaRatioConfig, AreaRatioSolution, Branch, DEFAULT_NEWTON_ITERATIONS, mach_from_area_ratio,
};
pub use mode::IsentropicMode;

/// The full set of isentropic flow quantities.
///
/// All fields share the broadcast shape of the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct IsentropicRelations {
    pub mach: Field,
    /// Static to stagnation temperature ratio, `T/T₀`.
    pub temperature: Field,
    /// Static to stagnation pressure ratio, `p/p₀`.
    pub pressure: Field,
    /// Static to stagnation density ratio, `ρ/ρ₀`.
    pub density: Field,
    /// Local to sonic area ratio, `A/A*`.
    pub area: Field,
}

/// Evaluates the isentropic relations from a known quantity named by `mode`.
///
/// Area ratio inversion uses [`AreaRatioConfig::default`].
///
/// # Errors
///
/// Returns [`RelationError::InvalidMode`] for an unrecognized mode, and
/// otherwise fails as [`solve`] does.
pub fn isentropic_relations(
    gamma: impl IntoField,
    flow: impl IntoField,
    mode: &str,
) -> Result<IsentropicRelations, RelationError> {
    let mode = mode.parse()?;
    solve(gamma, flow, mode, &AreaRatioConfig::default())
}

/// Evaluates the isentropic relations with a typed mode and solver config.
///
/// # Errors
///
/// Returns a [`RelationError`] if any input is non-real, `γ ≤ 1`, the shapes
/// don't broadcast, or `flow` lies outside the domain of `mode`.
pub fn solve(
    gamma: impl IntoField,
    flow: impl IntoField,
    mode: IsentropicMode,
    config: &AreaRatioConfig,
) -> Result<IsentropicRelations, RelationError> {
    let pair = sample(gamma, flow, mode.quantity())?;
    check_domain(&pair, mode)?;

    let mach = match mode {
        IsentropicMode::Mach => pair.flow.clone(),
        IsentropicMode::Temperature => pair.map(inverse::from_temperature),
        IsentropicMode::Pressure => pair.map(inverse::from_pressure),
        IsentropicMode::Density => pair.map(inverse::from_density),
        IsentropicMode::Subsonic => area_ratio::solve(&pair, Branch::Subsonic, config).mach,
        IsentropicMode::Supersonic => area_ratio::solve(&pair, Branch::Supersonic, config).mach,
    };

    Ok(evaluate(&pair, mach))
}

fn check_domain(pair: &Broadcast, mode: IsentropicMode) -> Result<(), RelationError> {
    let quantity = mode.quantity();
    match mode {
        IsentropicMode::Mach => validate::each::<NonNegative>(&pair.flow, quantity, "x ≥ 0"),
        IsentropicMode::Temperature | IsentropicMode::Pressure | IsentropicMode::Density => {
            validate::each::<UnitInterval>(&pair.flow, quantity, "0 ≤ x ≤ 1")
        }
        IsentropicMode::Subsonic | IsentropicMode::Supersonic => area_ratio::check_domain(pair),
    }
}

fn evaluate(pair: &Broadcast, mach: ArrayD<f64>) -> IsentropicRelations {
    let ratios = Zip::from(&pair.gamma)
        .and(&mach)
        .map_collect(|&gamma, &mach| forward::ratios(gamma, mach));

    IsentropicRelations {
        temperature: pair.output(ratios.map(|r| r.temperature)),
        pressure: pair.output(ratios.map(|r| r.pressure)),
        density: pair.output(ratios.map(|r| r.density)),
        area: pair.output(ratios.map(|r| r.area)),
        mach: pair.output(mach),
    }
}

/// Isentropic relations as a [`Model`] with a fixed input mode.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_aero::{
///     models::flow::{FlowInput, isentropic::{IsentropicFlow, IsentropicMode}},
///     support::field::Field,
/// };
///
/// let nozzle = IsentropicFlow::new(IsentropicMode::Pressure);
/// let input = FlowInput::new(Field::scalar(1.4), Field::scalar(1.0));
///
/// let output = nozzle.call(&input).unwrap();
/// assert_eq!(output.mach.as_scalar(), Some(0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsentropicFlow {
    mode: IsentropicMode,
    config: AreaRatioConfig,
}

impl IsentropicFlow {
    /// Creates a model that reads its flow input in `mode`.
    #[must_use]
    pub fn new(mode: IsentropicMode) -> Self {
        Self {
            mode,
            config: AreaRatioConfig::default(),
        }
    }

    /// Replaces the area ratio solver configuration.
    #[must_use]
    pub fn with_config(self, config: AreaRatioConfig) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub fn mode(&self) -> IsentropicMode {
        self.mode
    }
}

impl Model for IsentropicFlow {
    type Input = FlowInput;
    type Output = IsentropicRelations;
    type Error = RelationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve(&input.gamma, &input.flow, self.mode, &self.config)
    }
}
