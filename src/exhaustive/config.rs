//! Exhaustive search configuration.

/// Largest input the `u64` subset mask can represent.
pub const MASK_WIDTH: usize = u64::BITS as usize - 1;

/// Configuration for [`ExhaustiveRunner`](super::ExhaustiveRunner).
///
/// # Examples
///
/// ```
/// use u_activity_select::exhaustive::ExhaustiveConfig;
///
/// let config = ExhaustiveConfig::default()
///     .with_max_intervals(18)
///     .with_reject_degenerate(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveConfig {
    /// Inputs longer than this are refused with
    /// [`SelectError::TooManyIntervals`](crate::SelectError::TooManyIntervals).
    ///
    /// Must be in `1..=MASK_WIDTH`. Every extra interval doubles the run time.
    pub max_intervals: usize,

    /// Refuse zero-length intervals (`end == start`) as well as inverted ones.
    ///
    /// Inverted intervals (`end < start`) are always refused.
    pub reject_degenerate: bool,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            max_intervals: 25,
            reject_degenerate: true,
        }
    }
}

impl ExhaustiveConfig {
    /// Sets the largest input size the search accepts.
    pub fn with_max_intervals(mut self, n: usize) -> Self {
        self.max_intervals = n;
        self
    }

    /// Sets whether zero-length intervals are refused.
    pub fn with_reject_degenerate(mut self, reject: bool) -> Self {
        self.reject_degenerate = reject;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_intervals == 0 {
            return Err("max_intervals must be at least 1".into());
        }
        if self.max_intervals > MASK_WIDTH {
            return Err(format!(
                "max_intervals must be at most {MASK_WIDTH}, got {}",
                self.max_intervals
            ));
        }
        Ok(())
    }
}
