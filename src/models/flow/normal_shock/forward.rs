use super::{strongest_density_ratio, strong_shock_downstream_mach};

/// Property ratios across a normal shock at one upstream Mach number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Jump {
    pub(super) downstream_mach: f64,
    pub(super) temperature: f64,
    pub(super) pressure: f64,
    pub(super) density: f64,
    pub(super) total_pressure: f64,
    pub(super) pitot_pressure: f64,
}

/// Evaluates the normal shock relations at upstream Mach number `mach`.
///
/// An infinite upstream Mach number returns the limiting values of the
/// relations rather than the `NaN`s the formulas would produce.
pub(super) fn jump(gamma: f64, mach: f64) -> Jump {
    if mach.is_infinite() {
        return strong_limit(gamma);
    }

    let a = (gamma + 1.0) / 2.0;
    let b = (gamma - 1.0) / 2.0;
    let c = gamma / (gamma - 1.0);

    let k = mach * mach;

    let density = (gamma + 1.0) * k / (2.0 + (gamma - 1.0) * k);
    let pressure = 1.0 + (k - 1.0) * gamma / a;
    let temperature = pressure / density;

    Jump {
        downstream_mach: ((1.0 + b * k) / (gamma * k - b)).sqrt(),
        temperature,
        pressure,
        density,
        total_pressure: pressure * temperature.powf(-c),
        pitot_pressure: (a * a * k / (gamma * k - b)).powf(c) * (1.0 - gamma + 2.0 * gamma * k)
            / (gamma + 1.0),
    }
}

fn strong_limit(gamma: f64) -> Jump {
    Jump {
        downstream_mach: strong_shock_downstream_mach(gamma),
        temperature: f64::INFINITY,
        pressure: f64::INFINITY,
        density: strongest_density_ratio(gamma),
        total_pressure: 0.0,
        pitot_pressure: f64::INFINITY,
    }
}
