//! Exhaustive subset search.
//!
//! Enumerates every subset of the input as a `u64` bitmask and keeps the
//! first largest subset whose members are pairwise compatible. The cost is
//! `O(2^n · n^2)`, so this selector only serves as a correctness oracle for
//! small inputs (roughly `n <= 25`).
//!
//! Use [`select_exhaustive`] for the bare algorithm, or [`ExhaustiveRunner`]
//! for the guarded entry point that enforces a size ceiling and times the
//! call.

mod config;
mod runner;

pub use config::{ExhaustiveConfig, MASK_WIDTH};
pub use runner::{select_exhaustive, ExhaustiveRunner};
