//! Closed-form inverses of the isentropic static to stagnation ratios.
//!
//! A zero ratio corresponds to an infinite Mach number.

/// Mach number from the temperature ratio `T/T₀`.
pub(super) fn from_temperature(gamma: f64, ratio: f64) -> f64 {
    from_stagnation_ratio(gamma, ratio, ratio.recip())
}

/// Mach number from the pressure ratio `p/p₀`.
pub(super) fn from_pressure(gamma: f64, ratio: f64) -> f64 {
    from_stagnation_ratio(gamma, ratio, ratio.powf((gamma - 1.0) / -gamma))
}

/// Mach number from the density ratio `ρ/ρ₀`.
pub(super) fn from_density(gamma: f64, ratio: f64) -> f64 {
    from_stagnation_ratio(gamma, ratio, ratio.powf(-(gamma - 1.0)))
}

/// Solves `T₀/T = 1 + b·M²` for `M`, given the equivalent temperature ratio
/// `t0_over_t`.
fn from_stagnation_ratio(gamma: f64, ratio: f64, t0_over_t: f64) -> f64 {
    if ratio == 0.0 {
        return f64::INFINITY;
    }
    let b = (gamma - 1.0) / 2.0;
    (b.recip() * (t0_over_t - 1.0)).sqrt()
}
