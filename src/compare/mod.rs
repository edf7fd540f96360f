//! Side-by-side comparison harness.
//!
//! Runs both selectors on the same input, times each call, and reports
//! whether they agree on the optimal count. The exhaustive run is skipped
//! above [`CompareConfig::exhaustive_limit`].
//!
//! # Key Types
//!
//! - [`Algorithm`]: which selector produced a result
//! - [`SelectionRun`]: one timed selector call
//! - [`Comparison`]: both runs on one input, printable as a console report
//! - [`ComparisonRunner`]: single-input and batch entry points

mod config;
mod runner;
mod timing;
mod types;

pub use config::CompareConfig;
pub use runner::ComparisonRunner;
pub use timing::timed;
pub use types::{Algorithm, Comparison, ScenarioReport, SelectionRun};
