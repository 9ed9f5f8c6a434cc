//! Property-based tests for the parallel sum reducer.

use proptest::prelude::*;

use benchtop_core::{
    compute_parallel_sum, split, CancellationToken, SumOptions, DRAW_MAX,
};

fn options(workers: usize) -> SumOptions {
    SumOptions {
        worker_count: workers,
        ..SumOptions::default()
    }
}

proptest! {
    /// Unit sizes always sum back to the requested total, for any
    /// total/worker combination.
    #[test]
    fn split_conserves_total(total in 0u64..100_000, workers in 1usize..32) {
        let units = split(total, workers).unwrap();
        prop_assert_eq!(units.len(), workers);
        prop_assert_eq!(units.iter().map(|u| u.draws).sum::<u64>(), total);
    }

    /// No unit differs from another by more than one draw.
    #[test]
    fn split_is_balanced(total in 0u64..100_000, workers in 1usize..32) {
        let units = split(total, workers).unwrap();
        let min = units.iter().map(|u| u.draws).min().unwrap();
        let max = units.iter().map(|u| u.draws).max().unwrap();
        prop_assert!(max - min <= 1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The final sum is the aggregate of exactly `worker_count` partials,
    /// each bounded by DRAW_MAX times its unit's size.
    #[test]
    fn run_structure_and_bounds(total in 0u64..5_000, workers in 1usize..8) {
        let report = compute_parallel_sum(total, &options(workers), &CancellationToken::new())
            .unwrap();

        prop_assert_eq!(report.partials.len(), workers);
        prop_assert_eq!(report.sum, report.partials.iter().map(|p| p.sum).sum::<u64>());
        prop_assert!(report.sum <= total * DRAW_MAX);

        let units = split(total, workers).unwrap();
        for partial in &report.partials {
            let unit = units[partial.index];
            prop_assert!(partial.sum <= unit.draws * DRAW_MAX);
        }
    }
}

/// 1000 repeated 4-worker runs never lose a publish.
#[test]
fn concurrent_publish_never_loses_results() {
    let opts = options(4);
    let cancel = CancellationToken::new();
    for _ in 0..1000 {
        let report = compute_parallel_sum(40, &opts, &cancel).unwrap();
        assert_eq!(report.partials.len(), 4);
    }
}

/// Every worker index publishes exactly once per run.
#[test]
fn each_worker_publishes_exactly_once() {
    let report = compute_parallel_sum(100, &options(4), &CancellationToken::new()).unwrap();
    let mut indices: Vec<usize> = report.partials.iter().map(|p| p.index).collect();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}
