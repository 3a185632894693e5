//! Public relation models.
//!
//! Models are organized by domain:
//!
//! - [`flow`]: Compressible-flow relations for a calorically perfect gas.
//! - [`environment`]: Atmosphere models.
//!
//! Every relation is available as plain functions and as a
//! [`twine_core::Model`] adapter that delegates to them.

pub mod environment;
pub mod flow;
