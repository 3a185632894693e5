//! Quantities used by the flow relations.
//!
//! This crate uses [`uom`] for dimensional quantities (temperature, pressure,
//! altitude). This module adds the few quantities [`uom`] doesn't provide:
//!
//! - [`SpecificGasConstant`], the gas constant per unit mass (J/kg·K).
//! - [`SpecificHeatRatio`], the dimensionless ratio `γ = cp/cv`, which is
//!   constrained to be greater than one.

mod specific_heat_ratio;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P2, Z0},
};

pub use specific_heat_ratio::SpecificHeatRatio;

/// Gas constant per unit mass, `R = p/(ρ·T)`, in J/kg·K.
///
/// Dividing a pressure by the product of this quantity and a
/// [`ThermodynamicTemperature`](uom::si::f64::ThermodynamicTemperature)
/// gives a [`MassDensity`](uom::si::f64::MassDensity).
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;
