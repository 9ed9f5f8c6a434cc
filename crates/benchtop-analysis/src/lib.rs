//! # benchtop-analysis
//!
//! Bench analysis helpers: the stoichiometry mass calculator, normalized
//! Gaussian waveforms, and the chart models for heating curves and XRD
//! scans consumed by the plot crate.

pub mod error;
pub mod gaussian;
pub mod heating_curve;
pub mod stoichiometry;
pub mod xrd;

// Re-exports
pub use error::AnalysisError;
pub use gaussian::{gaussian, gaussian_fwhm, FWHM_PER_SIGMA};
pub use heating_curve::{HeatingCurve, ReferenceLine, TimeUnit};
pub use stoichiometry::reaction_substance_masses;
pub use xrd::XrdScan;
