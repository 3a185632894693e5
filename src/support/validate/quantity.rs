use std::fmt;

/// A physical quantity accepted as input by one of the relations.
///
/// Used to name the offending input in a [`RelationError`](super::RelationError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    SpecificHeatRatio,
    MachNumber,
    TemperatureRatio,
    PressureRatio,
    DensityRatio,
    AreaRatio,
    DownstreamMachNumber,
    Altitude,
    StaticPressure,
    ReferenceTemperature,
    ReferencePressure,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SpecificHeatRatio => "specific heat ratio",
            Self::MachNumber => "Mach number",
            Self::TemperatureRatio => "temperature ratio",
            Self::PressureRatio => "pressure ratio",
            Self::DensityRatio => "density ratio",
            Self::AreaRatio => "area ratio",
            Self::DownstreamMachNumber => "downstream Mach number",
            Self::Altitude => "altitude",
            Self::StaticPressure => "static pressure",
            Self::ReferenceTemperature => "reference temperature",
            Self::ReferencePressure => "reference pressure",
        };
        f.write_str(name)
    }
}
