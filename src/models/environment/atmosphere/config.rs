use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    validate::{Quantity, RelationError},
};

use super::layers::LayerState;

/// Sea-level reference conditions of the standard atmosphere.
///
/// The layer table and lapse rates are fixed; only the conditions at its base
/// can be changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereConfig {
    pub sea_level_temperature: ThermodynamicTemperature,
    pub sea_level_pressure: Pressure,
}

impl AtmosphereConfig {
    #[must_use]
    pub fn new(
        sea_level_temperature: ThermodynamicTemperature,
        sea_level_pressure: Pressure,
    ) -> Self {
        Self {
            sea_level_temperature,
            sea_level_pressure,
        }
    }

    /// Validates the reference conditions and returns them in SI units.
    pub(super) fn sea_level(&self) -> Result<LayerState, RelationError> {
        let temperature = positive(
            self.sea_level_temperature.get::<kelvin>(),
            Quantity::ReferenceTemperature,
        )?;
        let pressure = positive(
            self.sea_level_pressure.get::<pascal>(),
            Quantity::ReferencePressure,
        )?;

        Ok(LayerState {
            temperature,
            pressure,
        })
    }
}

impl Default for AtmosphereConfig {
    /// The international standard sea-level conditions, 288.15 K and 101 325 Pa.
    fn default() -> Self {
        Self::new(
            ThermodynamicTemperature::new::<kelvin>(288.15),
            Pressure::new::<pascal>(101_325.0),
        )
    }
}

fn positive(value: f64, quantity: Quantity) -> Result<f64, RelationError> {
    StrictlyPositive::check(&value).map_err(|source| RelationError::Domain {
        quantity,
        index: 0,
        value,
        bound: "x > 0".to_owned(),
        source,
    })?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{pressure::kilopascal, thermodynamic_temperature::degree_celsius};

    use crate::support::constraint::ConstraintError;

    #[test]
    fn default_is_standard_sea_level() {
        let state = AtmosphereConfig::default().sea_level().unwrap();
        assert_relative_eq!(state.temperature, 288.15);
        assert_relative_eq!(state.pressure, 101_325.0);
    }

    #[test]
    fn accepts_any_temperature_unit() {
        let config = AtmosphereConfig::new(
            ThermodynamicTemperature::new::<degree_celsius>(25.0),
            Pressure::new::<kilopascal>(100.0),
        );
        let state = config.sea_level().unwrap();
        assert_relative_eq!(state.temperature, 298.15, max_relative = 1e-12);
        assert_relative_eq!(state.pressure, 100_000.0, max_relative = 1e-12);
    }

    #[test]
    fn rejects_non_positive_conditions() {
        let config = AtmosphereConfig {
            sea_level_pressure: Pressure::new::<pascal>(0.0),
            ..AtmosphereConfig::default()
        };
        assert_eq!(
            config.sea_level(),
            Err(RelationError::Domain {
                quantity: Quantity::ReferencePressure,
                index: 0,
                value: 0.0,
                bound: "x > 0".to_owned(),
                source: ConstraintError::Zero,
            })
        );

        let config = AtmosphereConfig {
            sea_level_temperature: ThermodynamicTemperature::new::<kelvin>(-1.0),
            ..AtmosphereConfig::default()
        };
        assert!(matches!(
            config.sea_level(),
            Err(RelationError::Domain {
                quantity: Quantity::ReferenceTemperature,
                ..
            })
        ));
    }
}
