//! Interval value type and the overlap predicate.
//!
//! An [`Interval`] is a half-open time range `[start, end)`. Two intervals
//! overlap iff each one starts strictly before the other ends, so touching
//! intervals (`a.end == b.start`) are compatible. Both selectors and all
//! validity checks go through this one predicate.

mod types;
mod validation;

pub use types::{overlaps, Interval};
pub use validation::{is_sub_multiset, is_valid_selection, reject_inverted, validate_intervals};
