//! Bitmask subset enumeration.

use super::config::{ExhaustiveConfig, MASK_WIDTH};
use crate::compare::{timed, Algorithm, SelectionRun};
use crate::error::SelectError;
use crate::interval::{reject_inverted, validate_intervals, Interval};
use log::debug;

/// Returns a maximum-cardinality pairwise non-overlapping subset of
/// `intervals`, found by trying every subset.
///
/// Masks are visited in increasing order and a mask replaces the current
/// best only when it has strictly more members, so among equally large
/// answers the first one in enumeration order wins. Members appear in input
/// order. Empty input returns immediately.
///
/// There is no ceiling here: callers must bound `n` themselves, or use
/// [`ExhaustiveRunner`].
///
/// # Panics
///
/// Panics if `intervals.len() > MASK_WIDTH` (63), which would overflow the
/// `u64` mask.
///
/// # Examples
///
/// ```
/// use u_activity_select::exhaustive::select_exhaustive;
/// use u_activity_select::interval::Interval;
///
/// let input: Vec<Interval<i64>> = [(1, 3), (2, 5), (4, 6), (6, 7), (5, 9), (8, 10)]
///     .into_iter()
///     .map(Interval::from)
///     .collect();
/// assert_eq!(select_exhaustive(&input).len(), 4);
/// ```
pub fn select_exhaustive<T: Copy + Ord>(intervals: &[Interval<T>]) -> Vec<Interval<T>> {
    let n = intervals.len();
    if n == 0 {
        return Vec::new();
    }
    assert!(
        n <= MASK_WIDTH,
        "exhaustive search supports at most {MASK_WIDTH} intervals, got {n}"
    );

    let mut best_mask = 0u64;
    let mut best_size = 0u32;
    let mut members: Vec<usize> = Vec::with_capacity(n);

    for mask in 1..(1u64 << n) {
        // Cannot beat the incumbent, skip the pair test.
        let size = mask.count_ones();
        if size <= best_size {
            continue;
        }

        members.clear();
        members.extend((0..n).filter(|&j| mask & (1u64 << j) != 0));

        if pairwise_compatible(intervals, &members) {
            best_mask = mask;
            best_size = size;
        }
    }

    (0..n)
        .filter(|&j| best_mask & (1u64 << j) != 0)
        .map(|j| intervals[j])
        .collect()
}

fn pairwise_compatible<T: Copy + Ord>(intervals: &[Interval<T>], members: &[usize]) -> bool {
    for (k, &a) in members.iter().enumerate() {
        for &b in &members[k + 1..] {
            if intervals[a].overlaps(&intervals[b]) {
                return false;
            }
        }
    }
    true
}

/// Guarded, timed entry point for the exhaustive search.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Runs the exhaustive search after checking the configured ceiling.
    ///
    /// # Errors
    ///
    /// - [`SelectError::InvalidConfig`] if `config` fails validation.
    /// - [`SelectError::TooManyIntervals`] if the input exceeds
    ///   `config.max_intervals`.
    /// - [`SelectError::DegenerateInterval`] if an interval has
    ///   `end < start`, or `end == start` while `config.reject_degenerate`
    ///   is set.
    pub fn run<T: Copy + Ord>(
        intervals: &[Interval<T>],
        config: &ExhaustiveConfig,
    ) -> Result<SelectionRun<T>, SelectError> {
        config.validate()?;

        if intervals.len() > config.max_intervals {
            return Err(SelectError::TooManyIntervals {
                count: intervals.len(),
                limit: config.max_intervals,
            });
        }
        if config.reject_degenerate {
            validate_intervals(intervals)?;
        } else {
            reject_inverted(intervals)?;
        }

        let (selection, elapsed) = timed(|| select_exhaustive(intervals));
        debug!(
            "exhaustive: selected {} of {} intervals in {:?}",
            selection.len(),
            intervals.len(),
            elapsed
        );

        Ok(SelectionRun::new(Algorithm::Exhaustive, selection, elapsed))
    }
}
