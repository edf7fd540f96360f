//! The [`Interval`] value type.

use std::fmt;
use std::str::FromStr;

/// A half-open time range `[start, end)`.
///
/// `start` is inclusive, `end` exclusive. An interval is well formed when
/// `end > start`; construction does not enforce this, see
/// [`validate_intervals`](super::validate_intervals) for an explicit check.
///
/// # Examples
///
/// ```
/// use u_activity_select::interval::Interval;
///
/// let a = Interval::new(1, 3);
/// let b = Interval::new(3, 5);
/// assert!(!a.overlaps(&b)); // touching is not overlapping
/// assert!(a.overlaps(&Interval::new(2, 4)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: Copy + Ord> Interval<T> {
    /// Creates an interval. Degenerate ranges (`end <= start`) are accepted.
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Inclusive lower bound.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Exclusive upper bound.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if `start < end`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Returns `true` if the two intervals share at least one instant.
    ///
    /// Symmetric: `a.overlaps(&b) == b.overlaps(&a)`.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl<T: Copy + Ord> From<(T, T)> for Interval<T> {
    fn from((start, end): (T, T)) -> Self {
        Self::new(start, end)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// Parses `start:end`, e.g. `"4:6"`. No validation is applied.
impl<T> FromStr for Interval<T>
where
    T: Copy + Ord + FromStr,
    T::Err: fmt::Display,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| format!("expected 'start:end', got '{s}'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<T>()
                .map_err(|e| format!("invalid bound '{}' in '{s}': {e}", part.trim()))
        };
        Ok(Self::new(parse(start)?, parse(end)?))
    }
}

/// Free-function form of [`Interval::overlaps`].
#[inline]
pub fn overlaps<T: Copy + Ord>(a: &Interval<T>, b: &Interval<T>) -> bool {
    a.overlaps(b)
}
