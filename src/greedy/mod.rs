//! Earliest-end-time greedy selection.
//!
//! Sorts by `end` and sweeps once, keeping every interval that starts no
//! earlier than the end of the last kept one. Optimal for activity
//! selection by the exchange argument: the earliest-ending compatible
//! interval never leaves less room than any other first choice.
//!
//! # References
//!
//! - Cormen, Leiserson, Rivest & Stein (2009), *Introduction to Algorithms*, §16.1

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::{select_greedy, GreedyRunner};
