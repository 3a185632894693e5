//! Newton-Raphson inversion of the Mach-area relation.
//!
//! The Mach-area relation
//!
//! ```text
//! A/A* = a^(−c) · (1 + b·M²)^c / M,   a = (γ+1)/2,  b = (γ−1)/2,  c = a/(γ−1)
//! ```
//!
//! is double valued: every area ratio above one has a subsonic and a
//! supersonic solution.
//! The branch is selected by the initial guess, which must lie in that
//! branch's basin of attraction.
//!
//! An infinite area ratio maps to the limit of the branch, `M = 0` or `M = ∞`.
//!
//! The solver runs a fixed number of iterations with no convergence test by
//! default, so very large area ratios may not converge.
//! Large area ratios can also land on the other branch with a tiny residual.
//! An element is flagged as unconverged when its residual is not small
//! relative to its area ratio or its Mach number lies on the wrong side of
//! one, and a warning is logged when any element is flagged.

use ndarray::ArrayD;

use crate::support::{
    constraint::AtLeastOne,
    field::{Field, IntoField},
    validate::{self, Broadcast, Quantity, RelationError},
};

use super::super::sample;

/// Default number of Newton-Raphson iterations for area ratio inversion.
pub const DEFAULT_NEWTON_ITERATIONS: usize = 10;

/// Residuals above this fraction of the area ratio trigger a warning.
const UNCONVERGED_RELATIVE_RESIDUAL: f64 = 1e-9;

/// The branch of the Mach-area relation to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Subsonic,
    Supersonic,
}

impl Branch {
    /// The initial Mach number guess for this branch.
    #[must_use]
    pub fn initial_guess(self) -> f64 {
        match self {
            Self::Subsonic => 0.2,
            Self::Supersonic => 1.8,
        }
    }
}

/// Solver configuration for area ratio inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaRatioConfig {
    /// Number of Newton-Raphson iterations per element.
    pub iterations: usize,

    /// Optional absolute tolerance on the area ratio residual.
    ///
    /// When set, an element stops iterating as soon as its residual is within
    /// the tolerance. When `None`, every element runs all `iterations`.
    pub residual_tol: Option<f64>,
}

impl Default for AreaRatioConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_NEWTON_ITERATIONS,
            residual_tol: None,
        }
    }
}

/// Mach numbers recovered from area ratios, with solver diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaRatioSolution {
    pub mach: Field,

    /// Final residual `A/A*(M) − A/A*` for each element.
    pub residual: Field,

    /// Most iterations performed by any element.
    pub iterations: usize,

    /// Number of elements flagged as unconverged.
    pub unconverged: usize,
}

/// Recovers Mach numbers from area ratios on the given branch.
///
/// # Errors
///
/// Returns a [`RelationError`] if any input is non-real, `γ ≤ 1`, the shapes
/// don't broadcast, or an area ratio is below one.
pub fn mach_from_area_ratio(
    gamma: impl IntoField,
    area: impl IntoField,
    branch: Branch,
    config: &AreaRatioConfig,
) -> Result<AreaRatioSolution, RelationError> {
    let pair = sample(gamma, area, Quantity::AreaRatio)?;
    check_domain(&pair)?;

    let solved = solve(&pair, branch, config);
    Ok(AreaRatioSolution {
        mach: pair.output(solved.mach),
        residual: pair.output(solved.residual),
        iterations: solved.iterations,
        unconverged: solved.unconverged,
    })
}

pub(super) fn check_domain(pair: &Broadcast) -> Result<(), RelationError> {
    validate::each::<AtLeastOne>(&pair.flow, Quantity::AreaRatio, "x ≥ 1")
}

pub(super) struct Solved {
    pub(super) mach: ArrayD<f64>,
    pub(super) residual: ArrayD<f64>,
    pub(super) iterations: usize,
    pub(super) unconverged: usize,
}

/// Solves every element of a validated pair.
pub(super) fn solve(pair: &Broadcast, branch: Branch, config: &AreaRatioConfig) -> Solved {
    let elements = pair.map(|gamma, area| newton(gamma, area, branch, config));

    let iterations = elements.iter().map(|e| e.iterations).max().unwrap_or(0);
    let unconverged = pair
        .flow
        .iter()
        .zip(elements.iter())
        .filter(|&(&area, element)| !element.converged(area, branch))
        .count();

    report(pair.flow.len(), unconverged, branch, iterations);

    Solved {
        mach: elements.map(|e| e.mach),
        residual: elements.map(|e| e.residual),
        iterations,
        unconverged,
    }
}

#[derive(Debug, Clone, Copy)]
struct Element {
    mach: f64,
    residual: f64,
    iterations: usize,
}

impl Element {
    /// Whether the solution is small in residual and on the requested branch.
    fn converged(&self, area: f64, branch: Branch) -> bool {
        // NaN residuals count as unconverged.
        let small = self.residual.abs() <= UNCONVERGED_RELATIVE_RESIDUAL * area;
        let on_branch = match branch {
            Branch::Subsonic => self.mach <= 1.0,
            Branch::Supersonic => self.mach >= 1.0,
        };
        small && on_branch
    }
}

fn newton(gamma: f64, area: f64, branch: Branch, config: &AreaRatioConfig) -> Element {
    if area.is_infinite() {
        let mach = match branch {
            Branch::Subsonic => 0.0,
            Branch::Supersonic => f64::INFINITY,
        };
        return Element {
            mach,
            residual: 0.0,
            iterations: 0,
        };
    }

    let relation = MachArea::new(gamma);

    let mut mach = branch.initial_guess();
    let mut iterations = 0;
    while iterations < config.iterations {
        let f = relation.area(mach) - area;
        if config.residual_tol.is_some_and(|tol| f.abs() <= tol) {
            break;
        }
        mach -= f / relation.derivative(mach);
        iterations += 1;
    }

    // Both branches meet at the sonic point, where the iteration only creeps
    // toward M = 1.
    if area == 1.0 {
        return Element {
            mach: 1.0,
            residual: 0.0,
            iterations,
        };
    }

    Element {
        mach,
        residual: relation.area(mach) - area,
        iterations,
    }
}

/// The Mach-area relation for one specific heat ratio.
struct MachArea {
    b: f64,
    c: f64,
    scale: f64,
}

impl MachArea {
    fn new(gamma: f64) -> Self {
        let a = (gamma + 1.0) / 2.0;
        let c = a / (gamma - 1.0);
        Self {
            b: (gamma - 1.0) / 2.0,
            c,
            scale: a.powf(-c),
        }
    }

    fn area(&self, mach: f64) -> f64 {
        let k = mach * mach;
        self.scale * (1.0 + self.b * k).powf(self.c) / mach
    }

    fn derivative(&self, mach: f64) -> f64 {
        let k = mach * mach;
        let slope = self.b * (2.0 * self.c - 1.0) * k - 1.0;
        self.scale * (1.0 + self.b * k).powf(self.c - 1.0) * slope / k
    }
}

fn report(len: usize, unconverged: usize, branch: Branch, iterations: usize) {
    if unconverged > 0 {
        log::warn!(
            "{branch:?} area ratio inversion may not have converged for {unconverged} of {len} \
             element(s) after {iterations} iteration(s)"
        );
    } else {
        log::debug!(
            "{branch:?} area ratio inversion converged for {len} element(s) in at most \
             {iterations} iteration(s)"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    use crate::models::flow::isentropic::forward::ratios;

    #[test]
    fn recovers_subsonic_mach_numbers() {
        for gamma in [1.2, 1.3, 1.4, 1.67] {
            for mach in [0.2, 0.3, 0.4, 0.6, 0.7, 0.8] {
                let area = ratios(gamma, mach).area;
                let element = newton(gamma, area, Branch::Subsonic, &AreaRatioConfig::default());
                assert_relative_eq!(element.mach, mach, max_relative = 1e-12);
                assert_eq!(element.iterations, DEFAULT_NEWTON_ITERATIONS);
            }
        }
    }

    #[test]
    fn recovers_supersonic_mach_numbers() {
        for gamma in [1.2, 1.3, 1.4, 1.67] {
            for mach in [1.4, 1.5, 2.0, 2.5, 3.0] {
                let area = ratios(gamma, mach).area;
                let element = newton(gamma, area, Branch::Supersonic, &AreaRatioConfig::default());
                assert_relative_eq!(element.mach, mach, max_relative = 1e-12);
            }
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn sonic_point_is_exact_on_both_branches() {
        for branch in [Branch::Subsonic, Branch::Supersonic] {
            let element = newton(1.4, 1.0, branch, &AreaRatioConfig::default());
            assert_eq!(element.mach, 1.0);
            assert_eq!(element.residual, 0.0);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn infinite_area_ratio_maps_to_branch_limits() {
        let config = AreaRatioConfig::default();
        assert_eq!(newton(1.4, f64::INFINITY, Branch::Subsonic, &config).mach, 0.0);
        assert_eq!(
            newton(1.4, f64::INFINITY, Branch::Supersonic, &config).mach,
            f64::INFINITY
        );
    }

    #[test]
    fn iteration_count_is_configurable() {
        let none = AreaRatioConfig {
            iterations: 0,
            residual_tol: None,
        };
        let element = newton(1.4, 2.0, Branch::Supersonic, &none);
        assert_relative_eq!(element.mach, 1.8);
        assert_eq!(element.iterations, 0);

        let early_exit = AreaRatioConfig {
            iterations: 50,
            residual_tol: Some(1e-12),
        };
        let element = newton(1.4, 1.6875, Branch::Supersonic, &early_exit);
        assert_relative_eq!(element.mach, 2.0, max_relative = 1e-12);
        assert!(element.iterations < 50);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let relation = MachArea::new(1.4);
        for mach in [0.3, 0.9, 1.5, 3.0] {
            let h = 1e-6;
            let numeric = (relation.area(mach + h) - relation.area(mach - h)) / (2.0 * h);
            assert_relative_eq!(relation.derivative(mach), numeric, max_relative = 1e-6);
        }
    }

    #[test]
    fn solution_reports_mach_and_residuals() {
        let solution = mach_from_area_ratio(
            1.4,
            array![1.0, 1.6875, 4.234_567_901_234_569],
            Branch::Supersonic,
            &AreaRatioConfig::default(),
        )
        .unwrap();

        let mach: Vec<f64> = solution.mach.iter().collect();
        assert_relative_eq!(mach[0], 1.0);
        assert_relative_eq!(mach[1], 2.0, max_relative = 1e-12);
        assert_relative_eq!(mach[2], 3.0, max_relative = 1e-12);
        assert!(solution.residual.iter().all(|r| r.abs() < 1e-12));
        assert_eq!(solution.iterations, DEFAULT_NEWTON_ITERATIONS);
        assert_eq!(solution.unconverged, 0);
    }

    #[test]
    fn large_subsonic_area_ratio_lands_on_wrong_branch_and_is_flagged() {
        let solution = mach_from_area_ratio(
            1.4,
            array![5.0, 10.0, 50.0],
            Branch::Subsonic,
            &AreaRatioConfig::default(),
        )
        .unwrap();

        let mach: Vec<f64> = solution.mach.iter().collect();
        assert_relative_eq!(mach[0], 0.116_688_894_382_899_03, max_relative = 1e-10);
        assert_relative_eq!(mach[1], 3.922_551_820_933_724_5, max_relative = 1e-10);
        assert_relative_eq!(mach[2], 5.913_765_282_312_207, max_relative = 1e-10);
        assert!(solution.residual.iter().all(|r| r.abs() < 1e-12));
        assert_eq!(solution.unconverged, 2);
    }

    #[test]
    fn convergence_requires_the_requested_branch() {
        let element = Element {
            mach: 3.9,
            residual: 0.0,
            iterations: DEFAULT_NEWTON_ITERATIONS,
        };
        assert!(!element.converged(10.0, Branch::Subsonic));
        assert!(element.converged(10.0, Branch::Supersonic));

        let sonic = Element {
            mach: 1.0,
            residual: 0.0,
            iterations: 0,
        };
        assert!(sonic.converged(1.0, Branch::Subsonic));
        assert!(sonic.converged(1.0, Branch::Supersonic));

        let diverged = Element {
            mach: f64::NAN,
            residual: f64::NAN,
            iterations: DEFAULT_NEWTON_ITERATIONS,
        };
        assert!(!diverged.converged(2.0, Branch::Supersonic));
    }

    #[test]
    fn area_ratio_below_one_is_rejected() {
        let err = mach_from_area_ratio(1.4, 0.99, Branch::Subsonic, &AreaRatioConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            RelationError::Domain {
                quantity: Quantity::AreaRatio,
                ..
            }
        ));
    }
}
