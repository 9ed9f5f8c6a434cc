//! # benchtop-core
//!
//! Parallel sum reducer: splits a requested draw count into independent
//! worker tasks, executes them on OS threads, collects each worker's
//! partial sum over a result channel, and aggregates them into one value
//! with wall-clock timing.

pub mod cancel;
pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod splitter;
pub mod worker;

// Re-exports
pub use cancel::CancellationToken;
pub use constants::{exit_codes, DEFAULT_RESULT_TIMEOUT, DEFAULT_WORKER_COUNT, DRAW_MAX};
pub use dispatcher::{compute_parallel_sum, RunReport, SumOptions};
pub use error::SumError;
pub use splitter::{split, WorkUnit};
pub use worker::{PartialResult, WorkerFailure, WorkerMessage};

/// Compute the parallel sum of `total` random draws with default options
/// (4 workers, 30s result deadline).
///
/// This is a convenience function for simple use cases. For worker count,
/// timeout, or cancellation control, use [`compute_parallel_sum`] directly.
///
/// # Example
/// ```
/// let sum = benchtop_core::parallel_sum(0).unwrap();
/// assert_eq!(sum, 0);
///
/// let sum = benchtop_core::parallel_sum(100).unwrap();
/// assert!(sum <= 100 * benchtop_core::DRAW_MAX);
/// ```
pub fn parallel_sum(total: u64) -> Result<u64, SumError> {
    let report = compute_parallel_sum(total, &SumOptions::default(), &CancellationToken::new())?;
    Ok(report.sum)
}
