//! Pressure conversions: pascal, bar, standard atmosphere, and torr.

use crate::constants::STANDARD_ATMOSPHERE;

/// Pascals per bar.
pub const PASCAL_PER_BAR: f64 = 1e5;

/// Torr per standard atmosphere, defined.
pub const TORR_PER_ATMOSPHERE: f64 = 760.0;

/// Convert pascal to bar.
#[must_use]
pub fn pascal_to_bar(pa: f64) -> f64 {
    pa / PASCAL_PER_BAR
}

/// Convert bar to pascal.
#[must_use]
pub fn bar_to_pascal(bar: f64) -> f64 {
    bar * PASCAL_PER_BAR
}

/// Convert pascal to standard atmosphere.
#[must_use]
pub fn pascal_to_atmosphere(pa: f64) -> f64 {
    pa / STANDARD_ATMOSPHERE
}

/// Convert standard atmosphere to pascal.
#[must_use]
pub fn atmosphere_to_pascal(atm: f64) -> f64 {
    atm * STANDARD_ATMOSPHERE
}

/// Convert pascal to torr.
#[must_use]
pub fn pascal_to_torr(pa: f64) -> f64 {
    pa * TORR_PER_ATMOSPHERE / STANDARD_ATMOSPHERE
}

/// Convert torr to pascal.
#[must_use]
pub fn torr_to_pascal(torr: f64) -> f64 {
    torr * STANDARD_ATMOSPHERE / TORR_PER_ATMOSPHERE
}
