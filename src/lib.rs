//! `vec_interval_set` is a coalescing set of disjoint half-open intervals.
//!
//! The set is represented by two index-aligned sorted vectors of low and high
//! endpoints, so every operation can locate the run of affected intervals with
//! two binary searches in O(logN) time and then rewrite just that run.
//! Inserted intervals absorb everything they overlap *or touch*, and removal
//! trims or splits the intervals at the edges of the removed range, so the
//! stored intervals are always non-empty, strictly increasing, and pairwise
//! non-adjacent.
//!
//! Endpoints only need `PartialOrd + Copy`, so both integer and float domains
//! work without any float-specific tolerance logic.
//!
//! # Example
//!
//! ```rust
//! use vec_interval_set::{Interval, IntervalSet};
//!
//! let mut set = IntervalSet::new();
//! set.insert(1, 2)?;
//! set.insert(2, 3)?;
//! // touching intervals coalesce
//! assert_eq!(set.ranges(), [Interval::new(1, 3)]);
//! set.remove(2, 5);
//! assert_eq!(set.ranges(), [Interval::new(1, 2)]);
//! # Ok::<(), vec_interval_set::InvalidIntervalError>(())
//! ```

mod error;
mod interval;
mod intervalset;
mod iter;


pub use error::InvalidIntervalError;
pub use interval::Interval;
pub use intervalset::IntervalSet;
pub use iter::{IntoIter, Iter};
