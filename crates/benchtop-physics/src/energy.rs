//! Energy conversions: joule, electronvolt, and kelvin (via the Boltzmann
//! constant).
//!
//! Joule/electronvolt conversions are plain scalings and cannot fail. The
//! kelvin-coupled conversions treat their kelvin-valued side as a
//! temperature, so negative values fail with [`DomainError`].

use crate::constants::{BOLTZMANN_CONSTANT, ELEMENTARY_CHARGE};
use crate::error::DomainError;

fn check_kelvin(k: f64) -> Result<(), DomainError> {
    if k < 0.0 {
        Err(DomainError::BelowAbsoluteZero {
            value: k,
            limit: 0.0,
            unit: "K",
        })
    } else {
        Ok(())
    }
}

/// Convert joule to electronvolt.
#[must_use]
pub fn joule_to_electronvolt(j: f64) -> f64 {
    j / ELEMENTARY_CHARGE
}

/// Convert electronvolt to joule.
#[must_use]
pub fn electronvolt_to_joule(ev: f64) -> f64 {
    ev * ELEMENTARY_CHARGE
}

/// Convert joule to kelvin, E = k_B T.
pub fn joule_to_kelvin(j: f64) -> Result<f64, DomainError> {
    let k = j / BOLTZMANN_CONSTANT;
    check_kelvin(k)?;
    Ok(k)
}

/// Convert kelvin to joule, E = k_B T.
pub fn kelvin_to_joule(k: f64) -> Result<f64, DomainError> {
    check_kelvin(k)?;
    Ok(k * BOLTZMANN_CONSTANT)
}

/// Convert electronvolt to kelvin.
pub fn electronvolt_to_kelvin(ev: f64) -> Result<f64, DomainError> {
    joule_to_kelvin(electronvolt_to_joule(ev))
}

/// Convert kelvin to electronvolt.
pub fn kelvin_to_electronvolt(k: f64) -> Result<f64, DomainError> {
    Ok(joule_to_electronvolt(kelvin_to_joule(k)?))
}
