use std::str::FromStr;

use crate::support::validate::{Quantity, RelationError};

/// Selects which isentropic flow variable is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsentropicMode {
    /// Mach number, `M ≥ 0`.
    Mach,
    /// Static to stagnation temperature ratio, `0 ≤ T/T₀ ≤ 1`.
    Temperature,
    /// Static to stagnation pressure ratio, `0 ≤ p/p₀ ≤ 1`.
    Pressure,
    /// Static to stagnation density ratio, `0 ≤ ρ/ρ₀ ≤ 1`.
    Density,
    /// Area ratio `A/A* ≥ 1`, subsonic solution.
    Subsonic,
    /// Area ratio `A/A* ≥ 1`, supersonic solution.
    Supersonic,
}

impl IsentropicMode {
    const EXPECTED: &'static str = "mach (m), temp (t), pres (p), dens (d, rho), sub, sup";

    /// The physical quantity given in this mode.
    #[must_use]
    pub fn quantity(self) -> Quantity {
        match self {
            Self::Mach => Quantity::MachNumber,
            Self::Temperature => Quantity::TemperatureRatio,
            Self::Pressure => Quantity::PressureRatio,
            Self::Density => Quantity::DensityRatio,
            Self::Subsonic | Self::Supersonic => Quantity::AreaRatio,
        }
    }
}

impl FromStr for IsentropicMode {
    type Err = RelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mach" | "m" => Ok(Self::Mach),
            "temp" | "t" => Ok(Self::Temperature),
            "pres" | "p" => Ok(Self::Pressure),
            "dens" | "d" | "rho" => Ok(Self::Density),
            "sub" => Ok(Self::Subsonic),
            "sup" => Ok(Self::Supersonic),
            _ => Err(RelationError::InvalidMode {
                mode: s.to_owned(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("mach".parse(), Ok(IsentropicMode::Mach));
        assert_eq!("m".parse(), Ok(IsentropicMode::Mach));
        assert_eq!("t".parse(), Ok(IsentropicMode::Temperature));
        assert_eq!("pres".parse(), Ok(IsentropicMode::Pressure));
        assert_eq!("rho".parse(), Ok(IsentropicMode::Density));
        assert_eq!("sub".parse(), Ok(IsentropicMode::Subsonic));
        assert_eq!("sup".parse(), Ok(IsentropicMode::Supersonic));
    }

    #[test]
    fn rejects_unknown_modes() {
        let err = "area".parse::<IsentropicMode>().unwrap_err();
        assert!(matches!(err, RelationError::InvalidMode { mode, .. } if mode == "area"));

        assert!("MACH".parse::<IsentropicMode>().is_err());
        assert!("".parse::<IsentropicMode>().is_err());
    }

    #[test]
    fn modes_name_their_quantity() {
        assert_eq!(IsentropicMode::Subsonic.quantity(), Quantity::AreaRatio);
        assert_eq!(IsentropicMode::Supersonic.quantity(), Quantity::AreaRatio);
        assert_eq!(IsentropicMode::Temperature.quantity(), Quantity::TemperatureRatio);
    }
}
