//! Constants for the parallel sum reducer.

use std::time::Duration;

/// Default number of workers spawned per run.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Inclusive upper bound of a single random draw.
///
/// Each worker sums draws uniformly distributed over `[0, DRAW_MAX]`,
/// so a unit of `n` draws can never exceed `n * DRAW_MAX`.
pub const DRAW_MAX: u64 = 10;

/// Default deadline for the result-await loop.
pub const DEFAULT_RESULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Polling interval of the result-await loop. Bounds how late a
/// cancellation or deadline expiry can be observed.
pub const AWAIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (including worker failures).
    pub const ERROR_GENERIC: i32 = 1;
    /// The result-await deadline elapsed.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Invalid argument or configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Run cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
