//! Heating-curve chart model.
//!
//! Builds the plottable form of a furnace schedule: segment durations and
//! target temperatures become a cumulative time axis, per-point tick
//! labels, and dashed reference lines marking each plateau. Rendering is
//! a separate concern (see the plot crate).

use crate::error::AnalysisError;

/// Unit of the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Axis in minutes (input unit).
    Minutes,
    /// Axis in hours.
    Hours,
}

impl TimeUnit {
    /// Minutes per unit of this axis.
    #[must_use]
    pub fn minutes_per_unit(self) -> f64 {
        match self {
            TimeUnit::Minutes => 1.0,
            TimeUnit::Hours => 60.0,
        }
    }

    /// Axis label suffix.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "h",
        }
    }
}

/// A dashed guide line from one chart point to another.
pub type ReferenceLine = [(f64, f64); 2];

/// Plottable heating curve.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatingCurve {
    /// Curve points: (cumulative time in the chosen unit, temperature in C).
    pub points: Vec<(f64, f64)>,
    /// Tick positions on the time axis (one per schedule point).
    pub x_ticks: Vec<f64>,
    /// Tick labels for the time axis.
    pub x_tick_labels: Vec<String>,
    /// Tick positions on the temperature axis, deduplicated.
    pub y_ticks: Vec<f64>,
    /// Tick labels for the temperature axis.
    pub y_tick_labels: Vec<String>,
    /// Dashed guides: a vertical drop at each interior point and one
    /// horizontal line per distinct plateau temperature.
    pub reference_lines: Vec<ReferenceLine>,
    /// Unit of the time axis.
    pub time_unit: TimeUnit,
    /// Time-axis bounds.
    pub x_bounds: [f64; 2],
    /// Temperature-axis bounds.
    pub y_bounds: [f64; 2],
}

impl HeatingCurve {
    /// Build a heating curve from segment durations (minutes) and the
    /// temperature reached at the end of each segment.
    ///
    /// The first duration is the schedule's start offset, usually zero.
    /// Durations must be non-negative and both slices the same length.
    pub fn new(
        durations_min: &[f64],
        temperatures: &[f64],
        unit: TimeUnit,
    ) -> Result<Self, AnalysisError> {
        if durations_min.len() != temperatures.len() {
            return Err(AnalysisError::LengthMismatch {
                left: durations_min.len(),
                right: temperatures.len(),
            });
        }
        if durations_min.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        if durations_min.iter().any(|&d| d < 0.0) {
            return Err(AnalysisError::NonPositive("segment duration"));
        }

        let scale = unit.minutes_per_unit();
        let mut elapsed = 0.0;
        let points: Vec<(f64, f64)> = durations_min
            .iter()
            .zip(temperatures)
            .map(|(&d, &t)| {
                elapsed += d;
                (elapsed / scale, t)
            })
            .collect();

        let x_min = points[0].0;
        let x_max = points[points.len() - 1].0;
        let y_min = temperatures.iter().copied().fold(f64::INFINITY, f64::min);
        let y_max = temperatures
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        let mut reference_lines = Vec::new();
        let mut seen_plateaus: Vec<f64> = Vec::new();
        for &(x, y) in points.iter().take(points.len().saturating_sub(1)).skip(1) {
            reference_lines.push([(x, y), (x, y_min)]);
            if !seen_plateaus.iter().any(|&p| p == y) {
                reference_lines.push([(x, y), (x_min, y)]);
                seen_plateaus.push(y);
            }
        }

        let x_ticks: Vec<f64> = points.iter().map(|p| p.0).collect();
        let x_tick_labels = x_ticks.iter().map(|v| format!("{v}")).collect();
        let mut y_ticks: Vec<f64> = Vec::new();
        for &(_, y) in &points {
            if !y_ticks.iter().any(|&t| t == y) {
                y_ticks.push(y);
            }
        }
        y_ticks.sort_by(f64::total_cmp);
        let y_tick_labels = y_ticks.iter().map(|v| format!("{v}")).collect();

        Ok(Self {
            points,
            x_ticks,
            x_tick_labels,
            y_ticks,
            y_tick_labels,
            reference_lines,
            time_unit: unit,
            x_bounds: [x_min, x_max],
            y_bounds: [y_min, y_max],
        })
    }
}
