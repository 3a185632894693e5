use std::str::FromStr;

use crate::support::{constraint::ConstraintError, validate::RelationError};

/// Effective radius of the Earth used to relate geometric and geopotential
/// altitude, in meters.
pub const EARTH_RADIUS: f64 = 6_356_766.0;

/// How an altitude is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AltitudeConvention {
    /// Height above sea level.
    #[default]
    Geometric,
    /// Height scaled so gravitational acceleration is constant, `H = h·Rₑ/(Rₑ+h)`.
    Geopotential,
}

impl AltitudeConvention {
    const EXPECTED: &'static str = "geometric (geom), geopotential (geop)";

    /// Converts an altitude in this convention to geopotential altitude.
    #[must_use]
    pub fn to_geopotential(self, altitude: f64) -> f64 {
        match self {
            Self::Geometric => altitude * EARTH_RADIUS / (EARTH_RADIUS + altitude),
            Self::Geopotential => altitude,
        }
    }

    /// Converts a geopotential altitude to this convention.
    #[must_use]
    pub fn from_geopotential(self, altitude: f64) -> f64 {
        match self {
            Self::Geometric => EARTH_RADIUS * altitude / (EARTH_RADIUS - altitude),
            Self::Geopotential => altitude,
        }
    }

    /// Checks that `altitude` can be converted.
    ///
    /// # Errors
    ///
    /// Fails for non-finite altitudes, and for geometric altitudes at or
    /// below the center of the Earth.
    pub(super) fn check(self, altitude: f64) -> Result<(), ConstraintError> {
        if altitude.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if altitude == f64::INFINITY {
            Err(ConstraintError::AboveMaximum)
        } else if altitude == f64::NEG_INFINITY
            || (self == Self::Geometric && altitude <= -EARTH_RADIUS)
        {
            Err(ConstraintError::BelowMinimum)
        } else {
            Ok(())
        }
    }

    /// Describes the bound enforced by [`check`](Self::check).
    pub(super) fn bound(self) -> &'static str {
        match self {
            Self::Geometric => "-6356766 < x < ∞",
            Self::Geopotential => "-∞ < x < ∞",
        }
    }
}

impl FromStr for AltitudeConvention {
    type Err = RelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "geometric" | "geom" => Ok(Self::Geometric),
            "geopotential" | "geop" => Ok(Self::Geopotential),
            _ => Err(RelationError::InvalidMode {
                mode: s.to_owned(),
                expected: Self::EXPECTED,
            }),
        }
    }
}
