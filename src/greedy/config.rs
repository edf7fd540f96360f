//! Greedy runner configuration.

/// Configuration for [`GreedyRunner`](super::GreedyRunner).
#[derive(Debug, Clone)]
pub struct GreedyConfig {
    /// Refuse zero-length intervals (`end == start`) as well as inverted ones.
    ///
    /// Inverted intervals (`end < start`) are always refused.
    pub reject_degenerate: bool,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            reject_degenerate: true,
        }
    }
}

impl GreedyConfig {
    /// Sets [`reject_degenerate`](Self::reject_degenerate).
    pub fn with_reject_degenerate(mut self, reject: bool) -> Self {
        self.reject_degenerate = reject;
        self
    }
}
