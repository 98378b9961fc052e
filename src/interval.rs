//! The `Interval` stored in `IntervalSet` and represents the interval [low, high)
//!
//! `vec-interval-set` keeps its intervals disjoint and non-adjacent, so unlike a
//! plain sorted list there is never more than one stored interval covering a
//! given point. Intervals that touch, e.g. [1,4) and [4,6), are coalesced into
//! [1,6) on insert.
//!
//! Currently, `vec-interval-set` only supports half-open intervals, i.e., [...,...).

/// The interval stored in `IntervalSet` represents [low, high)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    /// Low value
    pub low: T,
    /// high value
    pub high: T,
}

impl<T: PartialOrd> Interval<T> {
    /// Create a new `Interval`
    ///
    /// # Panics
    ///
    /// This method panics when low >= high
    #[inline]
    pub fn new(low: T, high: T) -> Self {
        assert!(low < high, "invalid range");
        Self { low, high }
    }

    /// Checks if self overlaps with other interval
    ///
    /// Touching at a single endpoint does not count as overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.high > other.low && other.high > self.low
    }

    /// Checks if self and other share exactly one endpoint, e.g. [1,3) and [3,5)
    #[inline]
    pub fn touches(&self, other: &Self) -> bool {
        self.high == other.low || other.high == self.low
    }

    /// Checks if the point lies inside self
    #[inline]
    pub fn contains_point(&self, point: T) -> bool {
        self.low <= point && point < self.high
    }
}
