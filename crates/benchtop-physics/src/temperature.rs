//! Temperature conversions between Celsius, Fahrenheit, and Kelvin.
//!
//! Every conversion validates its input against absolute zero on the input
//! scale and fails with [`DomainError`] for unphysical temperatures.

use crate::constants::{ABSOLUTE_ZERO_CELSIUS, ABSOLUTE_ZERO_FAHRENHEIT};
use crate::error::DomainError;

fn check(value: f64, limit: f64, unit: &'static str) -> Result<(), DomainError> {
    if value < limit {
        Err(DomainError::BelowAbsoluteZero { value, limit, unit })
    } else {
        Ok(())
    }
}

/// Convert Celsius to Fahrenheit.
pub fn celsius_to_fahrenheit(c: f64) -> Result<f64, DomainError> {
    check(c, ABSOLUTE_ZERO_CELSIUS, "degC")?;
    Ok(c * 1.8 + 32.0)
}

/// Convert Fahrenheit to Celsius.
pub fn fahrenheit_to_celsius(f: f64) -> Result<f64, DomainError> {
    check(f, ABSOLUTE_ZERO_FAHRENHEIT, "degF")?;
    Ok((f - 32.0) / 1.8)
}

/// Convert Celsius to Kelvin.
pub fn celsius_to_kelvin(c: f64) -> Result<f64, DomainError> {
    check(c, ABSOLUTE_ZERO_CELSIUS, "degC")?;
    Ok(c - ABSOLUTE_ZERO_CELSIUS)
}

/// Convert Kelvin to Celsius.
pub fn kelvin_to_celsius(k: f64) -> Result<f64, DomainError> {
    check(k, 0.0, "K")?;
    Ok(k + ABSOLUTE_ZERO_CELSIUS)
}

/// Convert Fahrenheit to Kelvin.
pub fn fahrenheit_to_kelvin(f: f64) -> Result<f64, DomainError> {
    check(f, ABSOLUTE_ZERO_FAHRENHEIT, "degF")?;
    Ok((f - 32.0) / 1.8 - ABSOLUTE_ZERO_CELSIUS)
}

/// Convert Kelvin to Fahrenheit.
pub fn kelvin_to_fahrenheit(k: f64) -> Result<f64, DomainError> {
    check(k, 0.0, "K")?;
    Ok((k + ABSOLUTE_ZERO_CELSIUS) * 1.8 + 32.0)
}
