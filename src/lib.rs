//! # Twine Aero
//!
//! Compressible-flow relations and a standard atmosphere model for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Each relation takes one known quantity and returns the full consistent set
//! of derived quantities:
//!
//! - [`models::flow::isentropic`]: Mach number, static to stagnation
//!   temperature, pressure, and density ratios, and the sonic area ratio,
//!   from any one of them.
//! - [`models::flow::normal_shock`]: upstream and downstream Mach numbers and
//!   the static and stagnation property ratios across a normal shock.
//! - [`models::environment::atmosphere`]: temperature, speed of sound,
//!   pressure, and density of the international standard atmosphere.
//!
//! Inputs may be scalars or arrays of any shape (see [`support::field`]).
//! Scalar inputs produce scalar outputs and array inputs produce arrays of the
//! broadcast shape.
//!
//! ```
//! use twine_aero::models::flow::isentropic::isentropic_relations;
//!
//! let subsonic = isentropic_relations(1.4, 1.1, "sub").unwrap();
//! let mach = subsonic.mach.as_scalar().unwrap();
//! assert!((mach - 0.6924).abs() < 1e-4);
//! ```
//!
//! ## Crate layout
//!
//! - [`models`]: The relations, each with a [`twine_core::Model`] adapter.
//! - [`support`]: Constraints, fields, units, and input validation used by the
//!   models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable.

pub mod models;
pub mod support;
