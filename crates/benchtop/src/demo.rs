//! Built-in demo datasets for the chart viewers.

use benchtop_analysis::{gaussian_fwhm, AnalysisError, HeatingCurve, TimeUnit, XrdScan};

/// A typical sintering schedule: ramp to 950C over two hours, hold for
/// six, then cool back to room temperature.
pub fn heating_curve() -> Result<HeatingCurve, AnalysisError> {
    let durations_min = [0.0, 120.0, 360.0, 180.0];
    let temperatures = [20.0, 950.0, 950.0, 20.0];
    HeatingCurve::new(&durations_min, &temperatures, TimeUnit::Hours)
}

/// A synthetic powder diffraction pattern: five Gaussian peaks over a
/// flat background, sampled at 0.05 degree steps from 10 to 80 degrees.
pub fn xrd_scan() -> Result<XrdScan, AnalysisError> {
    // (two-theta center, peak height above background, fwhm in degrees)
    const PEAKS: [(f64, f64, f64); 5] = [
        (28.4, 1200.0, 0.25),
        (33.1, 480.0, 0.30),
        (47.5, 640.0, 0.30),
        (56.3, 410.0, 0.35),
        (69.1, 230.0, 0.40),
    ];
    const BACKGROUND: f64 = 30.0;

    let two_theta: Vec<f64> = (0..=1400).map(|i| 10.0 + f64::from(i) * 0.05).collect();
    let mut intensity = vec![BACKGROUND; two_theta.len()];

    for (center, height, fwhm) in PEAKS {
        let shape = gaussian_fwhm(&two_theta, center, fwhm)?;
        // gaussian_fwhm is unit-area; rescale so the peak tops out at `height`.
        let sigma = fwhm / benchtop_analysis::FWHM_PER_SIGMA;
        let scale = height * sigma * (2.0 * std::f64::consts::PI).sqrt();
        for (acc, g) in intensity.iter_mut().zip(&shape) {
            *acc += scale * g;
        }
    }

    XrdScan::new(&two_theta, &intensity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heating_curve_builds() {
        let curve = heating_curve().unwrap();
        assert_eq!(curve.points.len(), 4);
        assert_eq!(curve.time_unit, TimeUnit::Hours);
        assert_eq!(curve.x_bounds, [0.0, 11.0]);
        assert_eq!(curve.y_bounds, [20.0, 950.0]);
    }

    #[test]
    fn xrd_scan_builds_with_expected_extent() {
        let scan = xrd_scan().unwrap();
        assert_eq!(scan.points.len(), 1401);
        assert_eq!(scan.x_bounds, [10.0, 80.0]);
        // Strongest peak sits near its height plus the background.
        assert!(scan.y_bounds[1] > 1100.0);
        assert!(scan.y_bounds[1] < 1300.0);
    }

    #[test]
    fn xrd_peak_heights_are_close_to_nominal() {
        let scan = xrd_scan().unwrap();
        let near = |target: f64| {
            scan.points
                .iter()
                .filter(|(x, _)| (x - target).abs() < 0.5)
                .map(|&(_, y)| y)
                .fold(f64::NEG_INFINITY, f64::max)
        };
        assert!((near(28.4) - 1230.0).abs() < 20.0);
        assert!((near(47.5) - 670.0).abs() < 20.0);
    }
}
