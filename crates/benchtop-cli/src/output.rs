//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use benchtop_core::RunReport;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}\u{b5}s", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a count with thousand separators.
#[must_use]
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Serialize a run report as pretty JSON.
pub fn report_to_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Write a run report to a file as JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report(path: &str, report: &RunReport) -> io::Result<()> {
    let json = report_to_json(report).map_err(io::Error::other)?;
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchtop_core::PartialResult;

    fn sample_report() -> RunReport {
        RunReport {
            total_draws: 100,
            worker_count: 2,
            partials: vec![
                PartialResult { index: 0, sum: 260 },
                PartialResult { index: 1, sum: 250 },
            ],
            sum: 510,
            elapsed: Duration::from_millis(3),
        }
    }

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("\u{b5}s"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_seconds() {
        let s = format_duration(Duration::from_secs_f64(3.14));
        assert_eq!(s, "3.140s");
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert_eq!(s, "1m30.0s");
    }

    #[test]
    fn format_count_thousands() {
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(1234), "1,234");
    }

    #[test]
    fn json_contains_sum_and_partials() {
        let json = report_to_json(&sample_report()).unwrap();
        assert!(json.contains("\"sum\": 510"));
        assert!(json.contains("\"partials\""));
        assert!(json.contains("\"worker_count\": 2"));
    }

    #[test]
    fn write_report_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let path = path.to_str().unwrap();

        write_report(path, &sample_report()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("\"total_draws\": 100"));
    }
}
