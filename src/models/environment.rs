//! Models of the environment a vehicle flies through.

pub mod atmosphere;
