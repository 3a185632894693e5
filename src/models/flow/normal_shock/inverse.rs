//! Closed-form inverses of the normal shock relations.
//!
//! Each function returns the upstream Mach number.
//! Inputs on the strong shock bound map to `M₁ = ∞`.

use super::{strongest_density_ratio, strong_shock_downstream_mach};

/// Upstream Mach number from the downstream Mach number.
pub(super) fn from_downstream_mach(gamma: f64, downstream: f64) -> f64 {
    if downstream <= strong_shock_downstream_mach(gamma) {
        return f64::INFINITY;
    }
    let b = (gamma - 1.0) / 2.0;
    let k = downstream * downstream;
    ((1.0 + b * k) / (gamma * k - b)).sqrt()
}

/// Upstream Mach number from the static pressure ratio `p₂/p₁`.
pub(super) fn from_pressure(gamma: f64, ratio: f64) -> f64 {
    ((ratio - 1.0) * (gamma + 1.0) / (2.0 * gamma) + 1.0).sqrt()
}

/// Upstream Mach number from the density ratio `ρ₂/ρ₁`.
pub(super) fn from_density(gamma: f64, ratio: f64) -> f64 {
    if ratio >= strongest_density_ratio(gamma) {
        return f64::INFINITY;
    }
    (2.0 * ratio / (1.0 + gamma + ratio - ratio * gamma)).sqrt()
}
