//! Run-report presentation.

use benchtop_core::RunReport;

use crate::output::{format_count, format_duration};

/// Prints a run report to stdout.
pub struct ReportPresenter {
    verbose: bool,
    quiet: bool,
}

impl ReportPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Present a completed run.
    pub fn present(&self, report: &RunReport) {
        if self.quiet {
            println!("{}", report.sum);
            return;
        }

        println!(
            "The job took {} seconds to complete",
            report.elapsed.as_secs_f64()
        );
        println!("The final sum was: {}", format_count(report.sum));

        if self.verbose {
            println!(
                "Workers: {} ({} draws total, {})",
                report.worker_count,
                format_count(report.total_draws),
                format_duration(report.elapsed)
            );
            for partial in &report.partials {
                println!("  worker {}: {}", partial.index, format_count(partial.sum));
            }
        }
    }

    /// Present an error.
    pub fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchtop_core::PartialResult;
    use std::time::Duration;

    fn sample_report() -> RunReport {
        RunReport {
            total_draws: 100,
            worker_count: 4,
            partials: vec![
                PartialResult { index: 0, sum: 130 },
                PartialResult { index: 2, sum: 120 },
                PartialResult { index: 1, sum: 125 },
                PartialResult { index: 3, sum: 135 },
            ],
            sum: 510,
            elapsed: Duration::from_millis(7),
        }
    }

    #[test]
    fn quiet_presenter_constructs() {
        let presenter = ReportPresenter::new(false, true);
        assert!(presenter.quiet);
    }

    #[test]
    fn present_quiet() {
        ReportPresenter::new(false, true).present(&sample_report());
    }

    #[test]
    fn present_normal() {
        ReportPresenter::new(false, false).present(&sample_report());
    }

    #[test]
    fn present_verbose() {
        ReportPresenter::new(true, false).present(&sample_report());
    }

    #[test]
    fn present_error() {
        ReportPresenter::new(false, false).present_error("worker 2 failed");
    }
}
