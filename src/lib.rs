//! Activity selection: exhaustive subset search vs. the greedy
//! earliest-end-time rule.
//!
//! Given a set of half-open time intervals, both selectors return a largest
//! subset of pairwise non-overlapping intervals:
//!
//! - **Greedy** ([`greedy`]): sort by end time, sweep once. `O(n log n)`,
//!   provably optimal. This is the one to use.
//! - **Exhaustive** ([`exhaustive`]): try every subset. `O(2^n · n^2)`,
//!   a correctness oracle for inputs up to roughly 25 intervals.
//!
//! Both rely on the same strict overlap predicate ([`interval`]): touching
//! intervals do not overlap.
//!
//! Around the two selectors sit a seeded scenario generator
//! ([`synthetic`]) and a timing and reporting harness ([`compare`]).
//!
//! # Features
//!
//! - **`serde`**: `Serialize`/`Deserialize` for intervals and reports
//! - **`parallel`**: run scenario batches on the rayon thread pool
//! - **`cli`** (default): the `u-activity-select` binary
//!
//! # Example
//!
//! ```
//! use u_activity_select::{select_exhaustive, select_greedy, Interval};
//!
//! let input: Vec<Interval<i64>> = [(1, 3), (2, 5), (4, 6), (6, 7), (5, 9), (8, 10)]
//!     .into_iter()
//!     .map(Interval::from)
//!     .collect();
//!
//! assert_eq!(select_greedy(&input).len(), 4);
//! assert_eq!(select_exhaustive(&input).len(), 4);
//! ```

pub mod compare;
pub mod error;
pub mod exhaustive;
pub mod greedy;
pub mod interval;
pub mod synthetic;

pub use error::SelectError;
pub use exhaustive::select_exhaustive;
pub use greedy::select_greedy;
pub use interval::Interval;
