//! The international standard atmosphere.
//!
//! The atmosphere is divided into seven layers up to 84.852 km geopotential
//! altitude, each with a constant temperature lapse rate:
//!
//! | Base (km) | Lapse rate (K/km) |
//! |-----------|-------------------|
//! | 0 | −6.5 |
//! | 11 | 0 |
//! | 20 | +1.0 |
//! | 32 | +2.8 |
//! | 47 | 0 |
//! | 51 | −2.8 |
//! | 71 | −2.0 |
//!
//! Pressure follows from the hydrostatic equation for dry air as a perfect
//! gas, integrated upward from the sea-level conditions in
//! [`AtmosphereConfig`].
//! Below sea level the first layer is extended downward, and above the top
//! layer the atmosphere is isothermal.
//!
//! Altitudes are geometric or geopotential, chosen by
//! [`AltitudeConvention`].
//!
//! # Example
//!
//! ```
//! use approx::assert_relative_eq;
//! use twine_aero::models::environment::atmosphere::standard_atmosphere;
//!
//! let dead_sea = standard_atmosphere(-430.0, "geom").unwrap();
//!
//! assert!(dead_sea.pressure.as_scalar().unwrap() > 101_325.0);
//! assert_relative_eq!(dead_sea.temperature.as_scalar().unwrap(), 290.945, epsilon = 1e-2);
//! ```

mod config;
mod convention;
mod layers;

use ndarray::IxDyn;
use twine_core::Model;
use uom::si::{
    f64::{Length, MassDensity, Pressure, ThermodynamicTemperature, Velocity},
    length::meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constraint, ConstraintError, StrictlyPositive},
    field::{Field, IntoField},
    units::{SpecificGasConstant, SpecificHeatRatio},
    validate::{self, Quantity, RelationError},
};

use layers::{GAS_CONSTANT, Layers};

pub use config::AtmosphereConfig;
pub use convention::{AltitudeConvention, EARTH_RADIUS};

/// Atmospheric properties in SI units.
#[derive(Debug, Clone, PartialEq)]
pub struct AtmosphereProfile {
    /// Static temperature, K.
    pub temperature: Field,
    /// Speed of sound, m/s.
    pub speed_of_sound: Field,
    /// Static pressure, Pa.
    pub pressure: Field,
    /// Density, kg/m³.
    pub density: Field,
}

/// Evaluates the standard atmosphere at altitudes in meters.
///
/// # Errors
///
/// Fails as [`standard_atmosphere_with`] does, or with
/// [`RelationError::InvalidMode`] for an unrecognized convention.
pub fn standard_atmosphere(
    altitude: impl IntoField,
    convention: &str,
) -> Result<AtmosphereProfile, RelationError> {
    standard_atmosphere_with(altitude, convention.parse()?, &AtmosphereConfig::default())
}

/// Evaluates the standard atmosphere with explicit sea-level conditions.
///
/// # Errors
///
/// Returns a [`RelationError`] if an altitude is non-real or non-finite, a
/// geometric altitude is at or below `−EARTH_RADIUS`, or a sea-level
/// condition is not strictly positive.
pub fn standard_atmosphere_with(
    altitude: impl IntoField,
    convention: AltitudeConvention,
    config: &AtmosphereConfig,
) -> Result<AtmosphereProfile, RelationError> {
    let altitude = validate::real(altitude, Quantity::Altitude)?;
    validate::each_by(
        altitude.values(),
        Quantity::Altitude,
        convention.bound(),
        |h| convention.check(h),
    )?;
    let layers = Layers::walk(config.sea_level()?);

    let states = altitude
        .values()
        .map(|&h| Sample::at(&layers, convention.to_geopotential(h)));

    let output = |f: fn(&Sample) -> f64| Field::from_parts(states.map(f), altitude.is_scalar());
    Ok(AtmosphereProfile {
        temperature: output(|s| s.temperature),
        speed_of_sound: output(|s| s.speed_of_sound),
        pressure: output(|s| s.pressure),
        density: output(|s| s.density),
    })
}

/// Returns the altitude, in meters, at which the standard atmosphere has
/// static pressure `pressure` in pascals.
///
/// # Errors
///
/// Fails as [`pressure_altitude_with`] does, or with
/// [`RelationError::InvalidMode`] for an unrecognized convention.
pub fn pressure_altitude(
    pressure: impl IntoField,
    convention: &str,
) -> Result<Field, RelationError> {
    pressure_altitude_with(pressure, convention.parse()?, &AtmosphereConfig::default())
}

/// Returns pressure altitudes with explicit sea-level conditions.
///
/// Pressures above the sea-level pressure give negative altitudes.
///
/// # Errors
///
/// Returns a [`RelationError`] if a pressure is non-real, not strictly
/// positive, or infinite, or a sea-level condition is not strictly positive.
pub fn pressure_altitude_with(
    pressure: impl IntoField,
    convention: AltitudeConvention,
    config: &AtmosphereConfig,
) -> Result<Field, RelationError> {
    let pressure = validate::real(pressure, Quantity::StaticPressure)?;
    validate::each_by(pressure.values(), Quantity::StaticPressure, "0 < x < ∞", |p| {
        StrictlyPositive::check(&p)?;
        if p.is_infinite() {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(())
    })?;
    let layers = Layers::walk(config.sea_level()?);

    let altitude = pressure
        .values()
        .map(|&p| convention.from_geopotential(layers.altitude_at(p)));

    Ok(Field::from_parts(altitude, pressure.is_scalar()))
}

/// Atmospheric properties at one geopotential altitude.
#[derive(Debug, Clone, Copy)]
struct Sample {
    temperature: f64,
    speed_of_sound: f64,
    pressure: f64,
    density: f64,
}

impl Sample {
    fn at(layers: &Layers, geopotential: f64) -> Self {
        let state = layers.state_at(geopotential);
        let gamma = SpecificHeatRatio::air().value();
        Self {
            temperature: state.temperature,
            speed_of_sound: (gamma * GAS_CONSTANT * state.temperature).sqrt(),
            pressure: state.pressure,
            density: state.pressure / (GAS_CONSTANT * state.temperature),
        }
    }
}

/// The atmosphere at one altitude, as dimensioned quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereState {
    pub temperature: ThermodynamicTemperature,
    pub speed_of_sound: Velocity,
    pub pressure: Pressure,
    pub density: MassDensity,
}

/// The standard atmosphere as a [`Model`] of altitude.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use twine_core::Model;
/// use twine_aero::models::environment::atmosphere::{AltitudeConvention, StandardAtmosphere};
/// use uom::si::{f64::Length, length::kilometer, pressure::pascal};
///
/// let isa = StandardAtmosphere::new(AltitudeConvention::Geopotential);
/// let tropopause = isa.call(&Length::new::<kilometer>(11.0)).unwrap();
///
/// assert_relative_eq!(tropopause.pressure.get::<pascal>(), 22_632.055, epsilon = 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardAtmosphere {
    convention: AltitudeConvention,
    config: AtmosphereConfig,
}

impl StandardAtmosphere {
    #[must_use]
    pub fn new(convention: AltitudeConvention) -> Self {
        Self {
            convention,
            config: AtmosphereConfig::default(),
        }
    }

    /// Replaces the sea-level conditions.
    #[must_use]
    pub fn with_config(self, config: AtmosphereConfig) -> Self {
        Self { config, ..self }
    }

    /// Evaluates the atmosphere at a single altitude.
    ///
    /// # Errors
    ///
    /// Fails as [`standard_atmosphere_with`] does.
    pub fn state_at(&self, altitude: Length) -> Result<AtmosphereState, RelationError> {
        let h = altitude.get::<meter>();
        let profile = standard_atmosphere_with(h, self.convention, &self.config)?;

        let temperature = ThermodynamicTemperature::new::<kelvin>(scalar(&profile.temperature));
        let pressure = Pressure::new::<pascal>(scalar(&profile.pressure));
        let gas_constant = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(GAS_CONSTANT);

        Ok(AtmosphereState {
            temperature,
            speed_of_sound: Velocity::new::<meter_per_second>(scalar(&profile.speed_of_sound)),
            pressure,
            density: pressure / (gas_constant * temperature),
        })
    }
}

impl Default for StandardAtmosphere {
    fn default() -> Self {
        Self::new(AltitudeConvention::default())
    }
}

impl Model for StandardAtmosphere {
    type Input = Length;
    type Output = AtmosphereState;
    type Error = RelationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.state_at(*input)
    }
}

/// Reads the value of a field computed from a scalar input.
///
/// Such fields are zero-dimensional, so the empty index always exists.
fn scalar(field: &Field) -> f64 {
    field.values()[IxDyn(&[])]
}
