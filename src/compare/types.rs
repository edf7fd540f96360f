//! Result types for the comparison harness.

use crate::exhaustive::select_exhaustive;
use crate::greedy::select_greedy;
use crate::interval::Interval;
use crate::synthetic::Scenario;
use std::fmt;
use std::time::Duration;

/// The two selection algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Bitmask subset enumeration, `O(2^n · n^2)`.
    Exhaustive,
    /// Earliest-end-time sweep, `O(n log n)`.
    Greedy,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Exhaustive => "exhaustive",
            Algorithm::Greedy => "greedy",
        }
    }

    /// Runs the raw selector, without ceiling or validation.
    ///
    /// # Panics
    ///
    /// [`Algorithm::Exhaustive`] panics on more than 63 intervals, see
    /// [`select_exhaustive`].
    pub fn select<T: Copy + Ord>(&self, intervals: &[Interval<T>]) -> Vec<Interval<T>> {
        match self {
            Algorithm::Exhaustive => select_exhaustive(intervals),
            Algorithm::Greedy => select_greedy(intervals),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One timed selector call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionRun<T> {
    /// Selector that produced `selection`.
    pub algorithm: Algorithm,

    /// Selected intervals.
    pub selection: Vec<Interval<T>>,

    /// Wall-clock time of the selector call alone.
    pub elapsed: Duration,
}

impl<T> SelectionRun<T> {
    pub fn new(algorithm: Algorithm, selection: Vec<Interval<T>>, elapsed: Duration) -> Self {
        Self {
            algorithm,
            selection,
            elapsed,
        }
    }

    /// Number of selected intervals.
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

impl<T: fmt::Display> fmt::Display for SelectionRun<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} | {:>4} selected | {:>10.3} ms | [",
            self.algorithm.name(),
            self.selection.len(),
            self.elapsed.as_secs_f64() * 1_000.0
        )?;
        for (i, iv) in self.selection.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{iv}")?;
        }
        f.write_str("]")
    }
}

/// Both selectors run on the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison<T> {
    /// Number of intervals in the input.
    pub input_len: usize,

    /// Greedy run, always present.
    pub greedy: SelectionRun<T>,

    /// Exhaustive run, `None` when the input exceeded the configured limit.
    pub exhaustive: Option<SelectionRun<T>>,
}

impl<T> Comparison<T> {
    /// Whether both selectors found the same count, or `None` if the
    /// exhaustive run was skipped.
    pub fn counts_agree(&self) -> Option<bool> {
        self.exhaustive
            .as_ref()
            .map(|ex| ex.len() == self.greedy.len())
    }
}

impl<T: fmt::Display> fmt::Display for Comparison<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "input: {} intervals", self.input_len)?;
        writeln!(f, "  {}", self.greedy)?;
        match &self.exhaustive {
            Some(run) => writeln!(f, "  {run}")?,
            None => writeln!(f, "  {:<10} | skipped (input too large)", "exhaustive")?,
        }
        match self.counts_agree() {
            Some(true) => write!(f, "  counts agree: yes"),
            Some(false) => write!(f, "  counts agree: NO"),
            None => write!(f, "  counts agree: n/a"),
        }
    }
}

/// A comparison on a generated scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioReport {
    pub scenario: Scenario,

    /// Requested size (the sample scenario ignores it).
    pub size: usize,

    /// Seed used by the generator.
    pub seed: u64,

    pub comparison: Comparison<i64>,
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "== scenario {} (size {}, seed {})",
            self.scenario, self.size, self.seed
        )?;
        write!(f, "{}", self.comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(algorithm: Algorithm, pairs: &[(i64, i64)]) -> SelectionRun<i64> {
        let selection = pairs.iter().copied().map(Interval::from).collect();
        SelectionRun::new(algorithm, selection, Duration::from_micros(1500))
    }

    #[test]
    fn test_algorithm_select_dispatch() {
        let input: Vec<Interval<i64>> = [(0, 2), (1, 3), (2, 4)]
            .into_iter()
            .map(Interval::from)
            .collect();
        assert_eq!(Algorithm::Greedy.select(&input).len(), 2);
        assert_eq!(Algorithm::Exhaustive.select(&input).len(), 2);
    }

    #[test]
    fn test_elapsed_ms() {
        let r = run(Algorithm::Greedy, &[(0, 1)]);
        assert!((r.elapsed_ms() - 1.5).abs() < 1e-9);
        assert_eq!(r.len(), 1);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_counts_agree() {
        let mut cmp = Comparison {
            input_len: 3,
            greedy: run(Algorithm::Greedy, &[(0, 1), (2, 3)]),
            exhaustive: None,
        };
        assert_eq!(cmp.counts_agree(), None);

        cmp.exhaustive = Some(run(Algorithm::Exhaustive, &[(0, 1), (2, 3)]));
        assert_eq!(cmp.counts_agree(), Some(true));

        cmp.exhaustive = Some(run(Algorithm::Exhaustive, &[(0, 1)]));
        assert_eq!(cmp.counts_agree(), Some(false));
    }

    #[test]
    fn test_report_display() {
        let cmp = Comparison {
            input_len: 40,
            greedy: run(Algorithm::Greedy, &[(1, 3), (4, 6)]),
            exhaustive: None,
        };
        let text = cmp.to_string();
        assert!(text.contains("input: 40 intervals"));
        assert!(text.contains("[(1, 3), (4, 6)]"));
        assert!(text.contains("skipped"));
        assert!(text.contains("n/a"));
    }
}
