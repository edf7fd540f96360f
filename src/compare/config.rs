//! Comparison harness configuration.

use crate::exhaustive::{ExhaustiveConfig, MASK_WIDTH};
use crate::greedy::GreedyConfig;

/// Configuration for [`ComparisonRunner`](super::ComparisonRunner).
///
/// # Examples
///
/// ```
/// use u_activity_select::compare::CompareConfig;
///
/// let config = CompareConfig::default()
///     .with_exhaustive_limit(16)
///     .with_parallel(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Largest input the exhaustive selector is run on. Larger inputs only
    /// get the greedy run.
    pub exhaustive_limit: usize,

    /// Refuse zero-length intervals (`end == start`) as well as inverted ones.
    ///
    /// Inverted intervals (`end < start`) are always refused, since the greedy
    /// sweep is not optimal on them.
    pub reject_degenerate: bool,

    /// Run batch scenarios in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` cargo feature.
    pub parallel: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            exhaustive_limit: 25,
            reject_degenerate: true,
            parallel: false,
        }
    }
}

impl CompareConfig {
    /// Sets the largest input the exhaustive selector is run on.
    pub fn with_exhaustive_limit(mut self, n: usize) -> Self {
        self.exhaustive_limit = n;
        self
    }

    /// Sets whether zero-length intervals are refused.
    pub fn with_reject_degenerate(mut self, reject: bool) -> Self {
        self.reject_degenerate = reject;
        self
    }

    /// Sets whether batches use the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.exhaustive_limit > MASK_WIDTH {
            return Err(format!(
                "exhaustive_limit must be at most {MASK_WIDTH}, got {}",
                self.exhaustive_limit
            ));
        }
        Ok(())
    }

    pub(crate) fn greedy(&self) -> GreedyConfig {
        GreedyConfig::default().with_reject_degenerate(self.reject_degenerate)
    }

    /// Exhaustive settings; the greedy run already applied the degenerate
    /// policy to the same input.
    pub(crate) fn exhaustive(&self) -> ExhaustiveConfig {
        ExhaustiveConfig::default()
            .with_max_intervals(self.exhaustive_limit.max(1))
            .with_reject_degenerate(false)
    }
}
