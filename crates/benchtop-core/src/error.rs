//! Error type for parallel sum runs.

use std::time::Duration;

/// Error type for the parallel sum reducer.
///
/// All failures are terminal for the current run; no retries are performed.
#[derive(Debug, thiserror::Error)]
pub enum SumError {
    /// The requested size or worker count is invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A worker could not complete its computation.
    #[error("worker {index} failed: {reason}")]
    WorkerFailure {
        /// Index of the failed worker.
        index: usize,
        /// Human-readable failure reason.
        reason: String,
    },

    /// The result-await deadline elapsed before all workers published.
    #[error("timed out after {0:?} awaiting worker results")]
    Timeout(Duration),

    /// The run was cancelled.
    #[error("run cancelled")]
    Cancelled,
}
