//! Error type for unit conversions.

/// Error signaling a physically impossible input to a unit conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// The input corresponds to a temperature below absolute zero.
    #[error("temperature {value} {unit} is below absolute zero ({limit} {unit})")]
    BelowAbsoluteZero {
        /// Offending input value.
        value: f64,
        /// Lowest physical value on the input scale.
        limit: f64,
        /// Unit of the input scale.
        unit: &'static str,
    },
}
