//! Dispatch and aggregation.
//!
//! The dispatcher splits the requested total into work units, spawns one OS
//! thread per unit, retrieves exactly `worker_count` messages from the
//! result channel, joins every worker, and aggregates the partial sums.
//!
//! The run moves through dispatching, awaiting-results, and aggregating
//! phases; any worker failure, deadline expiry, or cancellation observed
//! along the way fails the whole run. No retries.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError};
use serde::Serialize;
use tracing::debug;

use crate::cancel::CancellationToken;
use crate::constants::{AWAIT_POLL_INTERVAL, DEFAULT_RESULT_TIMEOUT, DEFAULT_WORKER_COUNT};
use crate::error::SumError;
use crate::splitter::split;
use crate::worker::{run_unit, PartialResult, WorkerMessage};

/// Options for a parallel sum run.
#[derive(Debug, Clone)]
pub struct SumOptions {
    /// Number of workers to spawn.
    pub worker_count: usize,
    /// Deadline for the result-await loop; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for SumOptions {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            timeout: Some(DEFAULT_RESULT_TIMEOUT),
        }
    }
}

/// Wall-clock time and aggregate of one completed run. Derived data,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Total draws requested across all workers.
    pub total_draws: u64,
    /// Number of workers spawned (and results retrieved).
    pub worker_count: usize,
    /// Per-worker sums in arrival order.
    pub partials: Vec<PartialResult>,
    /// Aggregate of all partial sums.
    pub sum: u64,
    /// Elapsed wall-clock time from dispatch to aggregation.
    pub elapsed: Duration,
}

/// Split `total` draws across workers, execute them in parallel, and
/// aggregate the partial sums.
///
/// Blocks until every worker has published and terminated, or until the
/// first failure, deadline expiry, or cancellation. On the error paths the
/// remaining workers are abandoned rather than joined, so a stuck worker
/// cannot hang the caller.
pub fn compute_parallel_sum(
    total: u64,
    opts: &SumOptions,
    cancel: &CancellationToken,
) -> Result<RunReport, SumError> {
    let units = split(total, opts.worker_count)?;
    let start = Instant::now();
    debug!(total, workers = opts.worker_count, "dispatching workers");

    let (tx, rx) = bounded::<WorkerMessage>(opts.worker_count);
    let mut handles = Vec::with_capacity(opts.worker_count);
    for unit in units {
        let tx = tx.clone();
        let handle = thread::Builder::new()
            .name(format!("benchtop-worker-{}", unit.index))
            .spawn(move || {
                // Independent per-thread generator; no state shared with
                // other workers. A send failure means the dispatcher has
                // already abandoned the run.
                let mut rng = rand::rng();
                let _ = tx.send(Ok(run_unit(unit, &mut rng)));
            })
            .map_err(|e| SumError::WorkerFailure {
                index: unit.index,
                reason: format!("spawn failed: {e}"),
            })?;
        handles.push(handle);
    }
    drop(tx);

    let partials = collect_results(&rx, opts.worker_count, opts.timeout, cancel)?;
    debug!(received = partials.len(), "all results retrieved");

    // Every worker has published by now, so joins cannot block; a join
    // error still means a worker died after publishing.
    for (index, handle) in handles.into_iter().enumerate() {
        handle.join().map_err(|_| SumError::WorkerFailure {
            index,
            reason: "worker panicked".into(),
        })?;
    }

    let sum = partials.iter().map(|p| p.sum).sum();
    let elapsed = start.elapsed();
    debug!(sum, ?elapsed, "run complete");

    Ok(RunReport {
        total_draws: total,
        worker_count: opts.worker_count,
        partials,
        sum,
        elapsed,
    })
}

/// Retrieve exactly `expected` messages from the result channel, in
/// arrival order.
///
/// The wait is sliced into [`AWAIT_POLL_INTERVAL`] chunks so cancellation
/// and the deadline are observed even while no worker is publishing. A
/// disconnect before `expected` messages means a worker died without
/// publishing, which fails the run instead of under-counting.
fn collect_results(
    rx: &Receiver<WorkerMessage>,
    expected: usize,
    timeout: Option<Duration>,
    cancel: &CancellationToken,
) -> Result<Vec<PartialResult>, SumError> {
    let deadline = timeout.map(|t| Instant::now() + t);
    let mut partials = Vec::with_capacity(expected);

    while partials.len() < expected {
        cancel.check()?;
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                return Err(SumError::Timeout(
                    timeout.unwrap_or(DEFAULT_RESULT_TIMEOUT),
                ));
            }
        }

        match rx.recv_timeout(AWAIT_POLL_INTERVAL) {
            Ok(Ok(partial)) => {
                debug!(worker = partial.index, sum = partial.sum, "partial result");
                partials.push(partial);
            }
            Ok(Err(failure)) => {
                return Err(SumError::WorkerFailure {
                    index: failure.index,
                    reason: failure.reason,
                })
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                return Err(SumError::WorkerFailure {
                    index: partials.len(),
                    reason: "worker disconnected without publishing a result".into(),
                })
            }
        }
    }

    Ok(partials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DRAW_MAX;
    use crate::worker::WorkerFailure;

    fn run(total: u64, workers: usize) -> Result<RunReport, SumError> {
        let opts = SumOptions {
            worker_count: workers,
            ..SumOptions::default()
        };
        compute_parallel_sum(total, &opts, &CancellationToken::new())
    }

    #[test]
    fn zero_total_sums_to_zero() {
        let report = run(0, 4).unwrap();
        assert_eq!(report.sum, 0);
        assert_eq!(report.partials.len(), 4);
    }

    #[test]
    fn retrieves_one_result_per_worker() {
        let report = run(100, 4).unwrap();
        assert_eq!(report.worker_count, 4);
        assert_eq!(report.partials.len(), 4);
        assert_eq!(report.sum, report.partials.iter().map(|p| p.sum).sum());
    }

    #[test]
    fn sum_bounded_by_total_times_draw_max() {
        let report = run(1000, 4).unwrap();
        assert!(report.sum <= 1000 * DRAW_MAX);
    }

    #[test]
    fn single_worker_run() {
        let report = run(50, 1).unwrap();
        assert_eq!(report.partials.len(), 1);
        assert!(report.sum <= 50 * DRAW_MAX);
    }

    #[test]
    fn two_runs_are_structurally_identical() {
        let a = run(100, 4).unwrap();
        let b = run(100, 4).unwrap();
        assert_eq!(a.partials.len(), b.partials.len());
        assert_eq!(a.worker_count, b.worker_count);
        assert_eq!(a.total_draws, b.total_draws);
    }

    #[test]
    fn zero_workers_is_invalid() {
        assert!(matches!(run(100, 0), Err(SumError::InvalidArgument(_))));
    }

    #[test]
    fn cancelled_before_start() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = compute_parallel_sum(100, &SumOptions::default(), &cancel);
        assert!(matches!(result, Err(SumError::Cancelled)));
    }

    #[test]
    fn collect_times_out_on_silent_workers() {
        let (tx, rx) = bounded::<WorkerMessage>(4);
        let result = collect_results(
            &rx,
            4,
            Some(Duration::from_millis(10)),
            &CancellationToken::new(),
        );
        drop(tx);
        assert!(matches!(result, Err(SumError::Timeout(_))));
    }

    #[test]
    fn collect_fails_on_published_worker_error() {
        let (tx, rx) = bounded::<WorkerMessage>(4);
        tx.send(Err(WorkerFailure {
            index: 2,
            reason: "out of entropy".into(),
        }))
        .unwrap();
        let result = collect_results(&rx, 4, None, &CancellationToken::new());
        match result {
            Err(SumError::WorkerFailure { index, reason }) => {
                assert_eq!(index, 2);
                assert_eq!(reason, "out of entropy");
            }
            other => panic!("expected worker failure, got {other:?}"),
        }
    }

    #[test]
    fn collect_fails_on_disconnect_before_expected_count() {
        let (tx, rx) = bounded::<WorkerMessage>(4);
        tx.send(Ok(PartialResult { index: 0, sum: 5 })).unwrap();
        drop(tx);
        let result = collect_results(&rx, 4, None, &CancellationToken::new());
        assert!(matches!(result, Err(SumError::WorkerFailure { .. })));
    }

    #[test]
    fn collect_gathers_in_arrival_order() {
        let (tx, rx) = bounded::<WorkerMessage>(2);
        tx.send(Ok(PartialResult { index: 1, sum: 7 })).unwrap();
        tx.send(Ok(PartialResult { index: 0, sum: 3 })).unwrap();
        let partials = collect_results(&rx, 2, None, &CancellationToken::new()).unwrap();
        assert_eq!(partials[0].index, 1);
        assert_eq!(partials[1].index, 0);
    }

    #[test]
    fn default_options() {
        let opts = SumOptions::default();
        assert_eq!(opts.worker_count, DEFAULT_WORKER_COUNT);
        assert_eq!(opts.timeout, Some(DEFAULT_RESULT_TIMEOUT));
    }
}
