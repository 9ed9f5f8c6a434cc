//! Error type for analysis helpers.

/// Error type for the analysis helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Paired input slices have different lengths.
    #[error("input length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first slice.
        left: usize,
        /// Length of the second slice.
        right: usize,
    },

    /// An input that must be non-empty was empty.
    #[error("input must not be empty")]
    EmptyInput,

    /// A quantity that must be strictly positive was zero or negative.
    #[error("{0} must be positive")]
    NonPositive(&'static str),
}
