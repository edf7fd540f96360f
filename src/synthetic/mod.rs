//! Synthetic interval sets for benchmarking and testing.
//!
//! Each [`Scenario`] is a recipe: either seeded random data or one of the
//! structured edge cases (identical ranges, disjoint ranges, shared start,
//! shared end). The same [`ScenarioConfig`] with a fixed seed always yields
//! the same set.

mod config;
mod generator;

pub use config::{Scenario, ScenarioConfig};
pub use generator::{GeneratedSet, ScenarioGenerator};
