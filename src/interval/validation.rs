//! Input and output checks for interval sets.

use super::types::Interval;
use crate::error::SelectError;

/// Returns the first degenerate interval (`end <= start`) as an error.
pub fn validate_intervals<T: Copy + Ord>(intervals: &[Interval<T>]) -> Result<(), SelectError> {
    match intervals.iter().position(|iv| !iv.is_well_formed()) {
        Some(index) => Err(SelectError::DegenerateInterval { index }),
        None => Ok(()),
    }
}

/// Returns the first inverted interval (`end < start`) as an error.
///
/// Zero-length intervals pass. Used when degenerate input is allowed, since
/// the greedy sweep is only optimal for `end >= start`.
pub fn reject_inverted<T: Copy + Ord>(intervals: &[Interval<T>]) -> Result<(), SelectError> {
    match intervals.iter().position(|iv| iv.end() < iv.start()) {
        Some(index) => Err(SelectError::DegenerateInterval { index }),
        None => Ok(()),
    }
}

/// Returns `true` if no two members of `selection` overlap.
pub fn is_valid_selection<T: Copy + Ord>(selection: &[Interval<T>]) -> bool {
    selection
        .iter()
        .enumerate()
        .all(|(i, a)| selection[i + 1..].iter().all(|b| !a.overlaps(b)))
}

/// Returns `true` if every member of `selection` can be matched to a
/// distinct, value-equal member of `input`.
///
/// Duplicates in the input count separately, so a selection can never be
/// larger than its input and still pass.
pub fn is_sub_multiset<T: Copy + Ord>(selection: &[Interval<T>], input: &[Interval<T>]) -> bool {
    if selection.len() > input.len() {
        return false;
    }
    let mut used = vec![false; input.len()];
    selection.iter().all(|s| {
        match input
            .iter()
            .enumerate()
            .position(|(i, iv)| !used[i] && iv == s)
        {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivs(pairs: &[(i64, i64)]) -> Vec<Interval<i64>> {
        pairs.iter().copied().map(Interval::from).collect()
    }

    #[test]
    fn test_validate_ok() {
        assert!(validate_intervals(&ivs(&[(0, 1), (1, 5)])).is_ok());
        assert!(validate_intervals::<i64>(&[]).is_ok());
    }

    #[test]
    fn test_validate_reports_first_degenerate() {
        let input = ivs(&[(0, 1), (3, 3), (9, 2)]);
        assert_eq!(
            validate_intervals(&input),
            Err(SelectError::DegenerateInterval { index: 1 })
        );
    }

    #[test]
    fn test_reject_inverted_allows_zero_length() {
        assert!(reject_inverted(&ivs(&[(0, 1), (3, 3)])).is_ok());
        assert_eq!(
            reject_inverted(&ivs(&[(3, 3), (0, 1), (7, 2)])),
            Err(SelectError::DegenerateInterval { index: 2 })
        );
    }

    #[test]
    fn test_valid_selection() {
        assert!(is_valid_selection(&ivs(&[(1, 3), (4, 6), (6, 7), (8, 10)])));
        assert!(!is_valid_selection(&ivs(&[(1, 3), (2, 5)])));
        // Non-adjacent overlap is still caught.
        assert!(!is_valid_selection(&ivs(&[(0, 10), (20, 30), (5, 6)])));
        assert!(is_valid_selection::<i64>(&[]));
    }

    #[test]
    fn test_sub_multiset() {
        let input = ivs(&[(0, 100), (0, 100), (1, 2)]);
        assert!(is_sub_multiset(&ivs(&[(0, 100), (0, 100)]), &input));
        assert!(!is_sub_multiset(&ivs(&[(0, 100), (0, 100), (0, 100)]), &input));
        assert!(!is_sub_multiset(&ivs(&[(1, 3)]), &input));
        assert!(is_sub_multiset(&[], &input));
    }
}
