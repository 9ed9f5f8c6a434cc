//! Normalized Gaussian waveforms.

use std::f64::consts::PI;

use crate::error::AnalysisError;

/// Ratio of full width at half maximum to standard deviation,
/// 2 * sqrt(2 ln 2).
pub const FWHM_PER_SIGMA: f64 = 2.354_820_045_030_949_3;

/// Evaluate a normalized Gaussian (integral 1) at each sample point.
///
/// `sigma` must be strictly positive.
pub fn gaussian(samples: &[f64], mean: f64, sigma: f64) -> Result<Vec<f64>, AnalysisError> {
    if sigma <= 0.0 {
        return Err(AnalysisError::NonPositive("sigma"));
    }
    let norm = 1.0 / (sigma * (2.0 * PI).sqrt());
    Ok(samples
        .iter()
        .map(|&x| {
            let z = (x - mean) / sigma;
            norm * (-0.5 * z * z).exp()
        })
        .collect())
}

/// Evaluate a normalized Gaussian parameterized by its full width at half
/// maximum instead of its standard deviation.
///
/// `fwhm` must be strictly positive.
pub fn gaussian_fwhm(samples: &[f64], mean: f64, fwhm: f64) -> Result<Vec<f64>, AnalysisError> {
    if fwhm <= 0.0 {
        return Err(AnalysisError::NonPositive("fwhm"));
    }
    gaussian(samples, mean, fwhm / FWHM_PER_SIGMA)
}
