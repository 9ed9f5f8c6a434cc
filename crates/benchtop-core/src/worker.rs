//! Worker execution.
//!
//! A worker draws `unit.draws` integers uniformly from `[0, DRAW_MAX]` and
//! accumulates them left to right. Publishing the sum is its only observable
//! effect: workers do not log, retry, or report partial progress.

use rand::Rng;
use serde::Serialize;

use crate::constants::DRAW_MAX;
use crate::splitter::WorkUnit;

/// One worker's computed sum, pending aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartialResult {
    /// Index of the worker that produced this sum.
    pub index: usize,
    /// Sum of all draws in the worker's unit.
    pub sum: u64,
}

/// Failure report published in place of a `PartialResult`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerFailure {
    /// Index of the failed worker.
    pub index: usize,
    /// Human-readable failure reason.
    pub reason: String,
}

/// Message carried by the result channel: each worker publishes exactly one.
pub type WorkerMessage = Result<PartialResult, WorkerFailure>;

/// Execute one unit of work with the given generator.
///
/// Generic over [`Rng`] so tests can pin a seeded generator; production
/// workers each own an independent OS-entropy-seeded one.
pub fn run_unit<R: Rng>(unit: WorkUnit, rng: &mut R) -> PartialResult {
    let mut sum = 0u64;
    for _ in 0..unit.draws {
        sum += rng.random_range(0..=DRAW_MAX);
    }
    PartialResult {
        index: unit.index,
        sum,
    }
}
