//! XRD scan chart model.
//!
//! Pairs a two-theta axis with measured intensities and precomputes axis
//! bounds. Reading scan files is out of scope; callers supply the series.

use crate::error::AnalysisError;

/// Plottable X-ray diffraction scan.
#[derive(Debug, Clone, PartialEq)]
pub struct XrdScan {
    /// Scan points: (two-theta in degrees, intensity in counts).
    pub points: Vec<(f64, f64)>,
    /// Two-theta axis bounds.
    pub x_bounds: [f64; 2],
    /// Intensity axis bounds (floor clamped to zero for count data).
    pub y_bounds: [f64; 2],
}

impl XrdScan {
    /// Build a scan from parallel two-theta and intensity slices.
    pub fn new(two_theta: &[f64], intensity: &[f64]) -> Result<Self, AnalysisError> {
        if two_theta.len() != intensity.len() {
            return Err(AnalysisError::LengthMismatch {
                left: two_theta.len(),
                right: intensity.len(),
            });
        }
        if two_theta.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let x_min = two_theta.iter().copied().fold(f64::INFINITY, f64::min);
        let x_max = two_theta.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let y_min = intensity.iter().copied().fold(f64::INFINITY, f64::min);
        let y_max = intensity.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            points: two_theta.iter().copied().zip(intensity.iter().copied()).collect(),
            x_bounds: [x_min, x_max],
            y_bounds: [y_min.min(0.0), y_max],
        })
    }

    /// The same scan with intensities scaled so the strongest peak is 1.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let peak = self.y_bounds[1];
        if peak <= 0.0 {
            return self.clone();
        }
        Self {
            points: self.points.iter().map(|&(x, y)| (x, y / peak)).collect(),
            x_bounds: self.x_bounds,
            y_bounds: [self.y_bounds[0] / peak, 1.0],
        }
    }
}
