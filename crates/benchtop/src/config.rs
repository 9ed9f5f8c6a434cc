//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

/// Benchtop — laboratory bench utilities.
#[derive(Parser, Debug)]
#[command(name = "benchtop", version)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Total number of random draws to sum across all workers.
    #[arg(value_name = "N")]
    pub draws: Option<u64>,

    /// Number of parallel workers.
    #[arg(
        short,
        long,
        default_value_t = benchtop_core::DEFAULT_WORKER_COUNT,
        env = "BENCHTOP_WORKERS"
    )]
    pub workers: usize,

    /// Result-await deadline (e.g., "30s", "5m").
    #[arg(long, default_value = "30s")]
    pub timeout: String,

    /// Quiet mode (only output the sum).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (per-worker partial sums).
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the run report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Write the run report as JSON to this path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Show a built-in demo chart instead of running a sum.
    #[arg(long, value_enum)]
    pub plot: Option<PlotKind>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Built-in demo charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlotKind {
    /// Furnace heating schedule.
    HeatingCurve,
    /// Powder diffraction pattern.
    XrdScan,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse timeout string into Duration.
    #[must_use]
    pub fn timeout_duration(&self) -> std::time::Duration {
        parse_duration(&self.timeout).unwrap_or(benchtop_core::DEFAULT_RESULT_TIMEOUT)
    }
}

/// Parse a duration string like "5m", "1h", "30s".
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 3600))
    } else if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(std::time::Duration::from_millis(n))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    }
}
