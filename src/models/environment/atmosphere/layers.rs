//! The layer table of the standard atmosphere.
//!
//! Altitudes in this module are geopotential, in meters.

/// Specific gas constant of dry air, J/kg·K.
pub(super) const GAS_CONSTANT: f64 = 287.053;

/// Standard gravitational acceleration, m/s².
const GRAVITY: f64 = 9.80665;

/// Base altitude of each layer, with the top of the last tabulated layer.
const BASE_ALTITUDES: [f64; 8] = [
    0.0, 11_000.0, 20_000.0, 32_000.0, 47_000.0, 51_000.0, 71_000.0, 84_852.0,
];

/// Temperature lapse rate of each tabulated layer, K/m.
const LAPSE_RATES: [f64; 7] = [-6.5e-3, 0.0, 1.0e-3, 2.8e-3, 0.0, -2.8e-3, -2.0e-3];

/// Temperature (K) and pressure (Pa) at one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct LayerState {
    pub(super) temperature: f64,
    pub(super) pressure: f64,
}

impl LayerState {
    /// Integrates the hydrostatic equation `dh` meters through a layer with
    /// constant `lapse` rate.
    fn climb(self, lapse: f64, dh: f64) -> Self {
        if lapse == 0.0 {
            Self {
                temperature: self.temperature,
                pressure: self.pressure * (-GRAVITY * dh / (GAS_CONSTANT * self.temperature)).exp(),
            }
        } else {
            let temperature = self.temperature + lapse * dh;
            Self {
                temperature,
                pressure: self.pressure
                    * (temperature / self.temperature).powf(-GRAVITY / (lapse * GAS_CONSTANT)),
            }
        }
    }
}

/// Base conditions of every layer for one sea-level state.
///
/// The last entry is the top of the tabulated atmosphere, above which an
/// isothermal layer extends without bound.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Layers {
    bases: [LayerState; 8],
}

impl Layers {
    /// Walks the layer table upward from sea level, carrying the base state of
    /// each layer to the top of that layer.
    pub(super) fn walk(sea_level: LayerState) -> Self {
        let mut bases = [sea_level; 8];
        for (i, &lapse) in LAPSE_RATES.iter().enumerate() {
            let depth = BASE_ALTITUDES[i + 1] - BASE_ALTITUDES[i];
            bases[i + 1] = bases[i].climb(lapse, depth);
        }
        Self { bases }
    }

    /// Returns the state at geopotential altitude `h`.
    ///
    /// Altitudes below sea level extend the first layer downward.
    pub(super) fn state_at(&self, h: f64) -> LayerState {
        let i = BASE_ALTITUDES.iter().rposition(|&base| h >= base).unwrap_or(0);
        self.bases[i].climb(lapse_rate(i), h - BASE_ALTITUDES[i])
    }

    /// Returns the geopotential altitude at which the static pressure is `p`.
    ///
    /// Pressures above the sea-level pressure extend the first layer downward.
    pub(super) fn altitude_at(&self, p: f64) -> f64 {
        let i = self.bases.iter().rposition(|base| p <= base.pressure).unwrap_or(0);
        let LayerState {
            temperature,
            pressure,
        } = self.bases[i];
        let lapse = lapse_rate(i);

        let dh = if lapse == 0.0 {
            -GAS_CONSTANT * temperature / GRAVITY * (p / pressure).ln()
        } else {
            let top = temperature * (p / pressure).powf(-lapse * GAS_CONSTANT / GRAVITY);
            (top - temperature) / lapse
        };

        BASE_ALTITUDES[i] + dh
    }
}

/// Lapse rate of layer `i`; zero above the tabulated layers.
fn lapse_rate(i: usize) -> f64 {
    LAPSE_RATES.get(i).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn standard() -> Layers {
        Layers::walk(LayerState {
            temperature: 288.15,
            pressure: 101_325.0,
        })
    }

    #[test]
    fn base_conditions() {
        let expected = [
            (288.15, 101_325.0),
            (216.65, 22_632.055_458_751_718),
            (216.65, 5_474.884_659_730_91),
            (228.65, 868.017_647_755_643_3),
            (270.65, 110.906_115_784_328_49),
            (270.65, 66.938_750_097_411_46),
            (214.65, 3.956_410_348_188_565_5),
            (186.946, 0.373_382_417_486_578_4),
        ];

        let layers = standard();
        for (base, (temperature, pressure)) in layers.bases.iter().zip(expected) {
            assert_relative_eq!(base.temperature, temperature, max_relative = 1e-12);
            assert_relative_eq!(base.pressure, pressure, max_relative = 1e-12);
        }
    }

    #[test]
    fn layers_are_continuous_at_boundaries() {
        let layers = standard();
        for i in 1..BASE_ALTITUDES.len() {
            let boundary = BASE_ALTITUDES[i];
            let from_below =
                layers.bases[i - 1].climb(LAPSE_RATES[i - 1], boundary - BASE_ALTITUDES[i - 1]);
            let from_above = layers.state_at(boundary);

            assert_relative_eq!(
                from_below.temperature,
                from_above.temperature,
                max_relative = 1e-12,
            );
            assert_relative_eq!(from_below.pressure, from_above.pressure, max_relative = 1e-12);

            let just_below = layers.state_at(boundary - 1e-6);
            assert_relative_eq!(
                just_below.temperature,
                from_above.temperature,
                max_relative = 1e-9,
            );
            assert_relative_eq!(just_below.pressure, from_above.pressure, max_relative = 1e-9);
        }
    }

    #[test]
    fn isothermal_above_last_layer() {
        let state = standard().state_at(90_000.0);
        assert_relative_eq!(state.temperature, 186.946, max_relative = 1e-12);
        assert_relative_eq!(state.pressure, 0.145_742_094_935_651_63, max_relative = 1e-12);
    }

    #[test]
    fn pressure_inverts_altitude() {
        let layers = standard();
        let altitudes = [
            -3_000.0, 0.0, 5_000.0, 15_000.0, 25_000.0, 40_000.0, 49_000.0, 60_000.0, 80_000.0,
            100_000.0,
        ];
        for h in altitudes {
            let p = layers.state_at(h).pressure;
            assert_relative_eq!(layers.altitude_at(p), h, epsilon = 1e-6, max_relative = 1e-10);
        }
    }
}
