//! Single sweep over intervals sorted by end time.

use super::config::GreedyConfig;
use crate::compare::{timed, Algorithm, SelectionRun};
use crate::error::SelectError;
use crate::interval::{reject_inverted, validate_intervals, Interval};
use log::debug;

/// Returns a maximum-cardinality pairwise non-overlapping subset of
/// `intervals` using the earliest-end-time rule.
///
/// The sort is stable, so intervals with equal `end` are considered in input
/// order, except that zero-length intervals go after the longer ones sharing
/// their `end` (a point at `e` never conflicts with a range ending at `e`).
/// The result is in ascending `end` order and is identical on every call with
/// the same input.
///
/// Optimality assumes `end >= start` for every interval. Inverted intervals
/// are not checked here; [`GreedyRunner`] refuses them.
///
/// # Examples
///
/// ```
/// use u_activity_select::greedy::select_greedy;
/// use u_activity_select::interval::Interval;
///
/// let input: Vec<Interval<i64>> = [(1, 3), (2, 5), (4, 6), (6, 7), (5, 9), (8, 10)]
///     .into_iter()
///     .map(Interval::from)
///     .collect();
/// let expected: Vec<Interval<i64>> = [(1, 3), (4, 6), (6, 7), (8, 10)]
///     .into_iter()
///     .map(Interval::from)
///     .collect();
/// assert_eq!(select_greedy(&input), expected);
/// ```
pub fn select_greedy<T: Copy + Ord>(intervals: &[Interval<T>]) -> Vec<Interval<T>> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|iv| (iv.end(), iv.start() == iv.end()));

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut cursor = first.end();
    let mut selection = vec![first];

    for iv in iter {
        // Anything starting before the cursor overlaps the last pick.
        if iv.start() >= cursor {
            cursor = iv.end();
            selection.push(iv);
        }
    }

    selection
}

/// Checked, timed entry point for the greedy selector.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs the greedy selector.
    ///
    /// # Errors
    ///
    /// [`SelectError::DegenerateInterval`] if an interval has `end < start`,
    /// or `end == start` while `config.reject_degenerate` is set.
    pub fn run<T: Copy + Ord>(
        intervals: &[Interval<T>],
        config: &GreedyConfig,
    ) -> Result<SelectionRun<T>, SelectError> {
        if config.reject_degenerate {
            validate_intervals(intervals)?;
        } else {
            reject_inverted(intervals)?;
        }

        let (selection, elapsed) = timed(|| select_greedy(intervals));
        debug!(
            "greedy: selected {} of {} intervals in {:?}",
            selection.len(),
            intervals.len(),
            elapsed
        );

        Ok(SelectionRun::new(Algorithm::Greedy, selection, elapsed))
    }
}
