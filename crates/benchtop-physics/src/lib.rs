//! # benchtop-physics
//!
//! A fixed table of physical constants (CODATA 2014) and unit conversions
//! for temperature, energy, and pressure. Conversions that could produce a
//! temperature below absolute zero fail with [`DomainError`].

pub mod constants;
pub mod energy;
pub mod error;
pub mod pressure;
pub mod temperature;

// Re-exports
pub use constants::{lookup, PhysicalConstant, CONSTANTS};
pub use error::DomainError;
