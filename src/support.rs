//! Supporting utilities used by the relation models.
//!
//! These modules are public because they're useful on their own, but their
//! APIs are not stable.

pub mod constraint;
pub mod field;
pub mod units;
pub mod validate;
