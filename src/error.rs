//! Error type shared by the guarded runners and the scenario generator.
//!
//! The raw selectors ([`select_greedy`](crate::greedy::select_greedy),
//! [`select_exhaustive`](crate::exhaustive::select_exhaustive)) are total and
//! never produce one of these.

use std::fmt;

/// Errors reported by the runners and the synthetic data generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// The input is larger than the exhaustive search is allowed to enumerate.
    TooManyIntervals {
        /// Number of intervals in the input.
        count: usize,
        /// Configured ceiling.
        limit: usize,
    },

    /// An interval with `end <= start` was found while rejection is enabled.
    DegenerateInterval {
        /// Position of the offending interval in the input.
        index: usize,
    },

    /// A configuration failed its `validate()` check.
    InvalidConfig(String),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyIntervals { count, limit } => write!(
                f,
                "exhaustive search limited to {limit} intervals, got {count}"
            ),
            Self::DegenerateInterval { index } => {
                write!(f, "interval at index {index} has end <= start")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for SelectError {}

impl From<String> for SelectError {
    fn from(msg: String) -> Self {
        Self::InvalidConfig(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_too_many() {
        let err = SelectError::TooManyIntervals {
            count: 30,
            limit: 25,
        };
        let msg = err.to_string();
        assert!(msg.contains("25"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn test_display_degenerate() {
        let err = SelectError::DegenerateInterval { index: 3 };
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn test_from_string() {
        let err: SelectError = String::from("size must be positive").into();
        assert_eq!(
            err,
            SelectError::InvalidConfig("size must be positive".into())
        );
    }
}
