use std::str::FromStr;

use crate::support::validate::{Quantity, RelationError};

/// Selects which normal shock quantity is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalShockMode {
    /// Upstream Mach number, `M₁ ≥ 1`.
    Mach,
    /// Downstream Mach number, `sqrt((γ−1)/(2γ)) ≤ M₂ ≤ 1`.
    DownstreamMach,
    /// Static pressure ratio across the shock, `p₂/p₁ ≥ 1`.
    Pressure,
    /// Density ratio across the shock, `1 ≤ ρ₂/ρ₁ ≤ (γ+1)/(γ−1)`.
    Density,
}

impl NormalShockMode {
    const EXPECTED: &'static str = "mach (m, m1), down (mach2, m2, md), pres (p), dens (d, rho)";

    /// The physical quantity given in this mode.
    #[must_use]
    pub fn quantity(self) -> Quantity {
        match self {
            Self::Mach => Quantity::MachNumber,
            Self::DownstreamMach => Quantity::DownstreamMachNumber,
            Self::Pressure => Quantity::PressureRatio,
            Self::Density => Quantity::DensityRatio,
        }
    }
}

impl FromStr for NormalShockMode {
    type Err = RelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mach" | "m1" | "m" => Ok(Self::Mach),
            "down" | "mach2" | "m2" | "md" => Ok(Self::DownstreamMach),
            "pres" | "p" => Ok(Self::Pressure),
            "dens" | "d" | "rho" => Ok(Self::Density),
            _ => Err(RelationError::InvalidMode {
                mode: s.to_owned(),
                expected: Self::EXPECTED,
            }),
        }
    }
}
