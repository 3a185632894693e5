/// Isentropic ratios at a single Mach number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Ratios {
    pub(super) temperature: f64,
    pub(super) pressure: f64,
    pub(super) density: f64,
    pub(super) area: f64,
}

/// Evaluates the isentropic relations at `mach` for specific heat ratio `gamma`.
///
/// The area ratio is infinite at rest and reported as zero at `M = ∞`.
pub(super) fn ratios(gamma: f64, mach: f64) -> Ratios {
    let a = (gamma + 1.0) / 2.0;
    let b = (gamma - 1.0) / 2.0;
    let c = a / (gamma - 1.0);

    let d = 1.0 + b * mach * mach;

    let area = if mach == 0.0 {
        f64::INFINITY
    } else if mach.is_infinite() {
        0.0
    } else {
        a.powf(-c) * d.powf(c) / mach
    };

    Ratios {
        temperature: d.recip(),
        pressure: d.powf(-gamma / (gamma - 1.0)),
        density: d.powf(-1.0 / (gamma - 1.0)),
        area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn mach_three_in_air() {
        let r = ratios(1.4, 3.0);
        assert_relative_eq!(r.temperature, 0.357_142_857_142_857_15, max_relative = 1e-14);
        assert_relative_eq!(r.pressure, 0.027_223_683_703_862_824, max_relative = 1e-12);
        assert_relative_eq!(r.density, 0.076_226_314_370_815_9, max_relative = 1e-12);
        assert_relative_eq!(r.area, 4.234_567_901_234_569, max_relative = 1e-12);
    }

    #[test]
    fn sonic_point() {
        let r = ratios(1.4, 1.0);
        assert_relative_eq!(r.temperature, 1.0 / 1.2, max_relative = 1e-14);
        assert_relative_eq!(r.area, 1.0, max_relative = 1e-14);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn limits() {
        let at_rest = ratios(1.4, 0.0);
        assert_eq!(at_rest.temperature, 1.0);
        assert_eq!(at_rest.pressure, 1.0);
        assert_eq!(at_rest.density, 1.0);
        assert_eq!(at_rest.area, f64::INFINITY);

        let infinite = ratios(1.4, f64::INFINITY);
        assert_eq!(infinite.temperature, 0.0);
        assert_eq!(infinite.pressure, 0.0);
        assert_eq!(infinite.density, 0.0);
        assert_eq!(infinite.area, 0.0);
    }
}
