//! Work splitting.
//!
//! Divides a total draw count into per-worker units. The remainder policy
//! is integer division with the leftover distributed one extra draw each to
//! the first `total % workers` units, so unit sizes always sum to the total
//! exactly (no work lost or duplicated).

use crate::error::SumError;

/// The portion of total work assigned to one worker: a count of random
/// draws. Immutable once created; consumed by exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkUnit {
    /// Stable worker index, used for diagnostics and failure reports.
    pub index: usize,
    /// Number of random draws this worker must generate and sum.
    pub draws: u64,
}

/// Split `total` draws into `workers` units.
///
/// Returns `SumError::InvalidArgument` if `workers` is zero.
pub fn split(total: u64, workers: usize) -> Result<Vec<WorkUnit>, SumError> {
    if workers == 0 {
        return Err(SumError::InvalidArgument(
            "worker count must be positive".into(),
        ));
    }

    let workers_u64 = workers as u64;
    let base = total / workers_u64;
    let remainder = total % workers_u64;

    Ok((0..workers)
        .map(|index| WorkUnit {
            index,
            draws: base + u64::from((index as u64) < remainder),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_of(units: &[WorkUnit]) -> u64 {
        units.iter().map(|u| u.draws).sum()
    }

    #[test]
    fn even_split() {
        let units = split(100, 4).unwrap();
        assert_eq!(units.len(), 4);
        assert!(units.iter().all(|u| u.draws == 25));
        assert_eq!(total_of(&units), 100);
    }

    #[test]
    fn remainder_goes_to_first_units() {
        let units = split(10, 4).unwrap();
        let draws: Vec<u64> = units.iter().map(|u| u.draws).collect();
        assert_eq!(draws, vec![3, 3, 2, 2]);
        assert_eq!(total_of(&units), 10);
    }

    #[test]
    fn zero_total() {
        let units = split(0, 4).unwrap();
        assert_eq!(units.len(), 4);
        assert!(units.iter().all(|u| u.draws == 0));
    }

    #[test]
    fn more_workers_than_draws() {
        let units = split(3, 8).unwrap();
        let draws: Vec<u64> = units.iter().map(|u| u.draws).collect();
        assert_eq!(draws, vec![1, 1, 1, 0, 0, 0, 0, 0]);
        assert_eq!(total_of(&units), 3);
    }

    #[test]
    fn single_worker_takes_everything() {
        let units = split(99, 1).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].draws, 99);
    }

    #[test]
    fn zero_workers_rejected() {
        assert!(matches!(split(100, 0), Err(SumError::InvalidArgument(_))));
    }

    #[test]
    fn indices_are_sequential() {
        let units = split(7, 3).unwrap();
        for (i, unit) in units.iter().enumerate() {
            assert_eq!(unit.index, i);
        }
    }
}
