use crate::error::InvalidIntervalError;
use crate::interval::Interval;
use crate::iter::Iter;

/// A coalescing set of disjoint half-open intervals, which supports union-style
/// insertion, subtraction, and overlap queries on dynamic sets of intervals.
///
/// The set is backed by two index-aligned sorted vectors, `starts` and `ends`,
/// where position `i` holds the interval `[starts[i], ends[i])`. The structural
/// invariant `starts[i] < ends[i] < starts[i + 1]` holds at all times: stored
/// intervals are non-empty, strictly increasing, and never touch. Every
/// operation locates the affected run of intervals with two binary searches in
/// O(log n) and then rewrites that run in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalSet<T> {
    /// Low endpoints, sorted ascending
    pub(crate) starts: Vec<T>,
    /// High endpoints, sorted ascending and index-aligned with `starts`
    pub(crate) ends: Vec<T>,
}

impl<T> IntervalSet<T>
where
    T: PartialOrd + Copy,
{
    /// Create an empty `IntervalSet`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            starts: Vec::new(),
            ends: Vec::new(),
        }
    }

    /// Creates a new `IntervalSet` with estimated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            starts: Vec::with_capacity(capacity),
            ends: Vec::with_capacity(capacity),
        }
    }

    /// Insert the interval `[low, high)` into the set.
    ///
    /// The inserted interval absorbs every stored interval it overlaps or
    /// touches, so the result is a single merged interval covering them all.
    /// Inserting an interval that is already covered leaves the set unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIntervalError`] when `low >= high` or the endpoints do
    /// not compare (e.g. `NaN`). The set is not modified in that case.
    ///
    /// # Example
    /// ```rust
    /// use vec_interval_set::{Interval, IntervalSet};
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(1, 2)?;
    /// set.insert(3, 5)?;
    /// assert_eq!(set.ranges(), [Interval::new(1, 2), Interval::new(3, 5)]);
    /// // filling the gap coalesces all three into one
    /// set.insert(2, 3)?;
    /// assert_eq!(set.ranges(), [Interval::new(1, 5)]);
    /// assert!(set.insert(5, 5).is_err());
    /// # Ok::<(), vec_interval_set::InvalidIntervalError>(())
    /// ```
    #[inline]
    pub fn insert(&mut self, low: T, high: T) -> Result<(), InvalidIntervalError> {
        if !(low < high) {
            return Err(InvalidIntervalError);
        }
        self.insert_unchecked(low, high);
        Ok(())
    }

    /// Remove the interval `[low, high)` from the set.
    ///
    /// Stored intervals fully inside `[low, high)` are dropped; intervals
    /// extending past an edge of the removed range are trimmed, and a single
    /// stored interval covering both edges splits into two fragments. Removing
    /// a range that overlaps nothing, including an empty or reversed range
    /// (`high <= low`), is a no-op.
    ///
    /// # Example
    /// ```rust
    /// use vec_interval_set::{Interval, IntervalSet};
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(1, 6)?;
    /// set.remove(2, 3);
    /// assert_eq!(set.ranges(), [Interval::new(1, 2), Interval::new(3, 6)]);
    /// set.remove(-3, -1);
    /// assert_eq!(set.len(), 2);
    /// # Ok::<(), vec_interval_set::InvalidIntervalError>(())
    /// ```
    #[inline]
    pub fn remove(&mut self, low: T, high: T) {
        let (lo, hi) = self.intersection_bound(&low, &high);
        if lo == hi {
            return;
        }
        // Only the intervals at lo and hi - 1 can survive, as trimmed
        // fragments; anything between them is completely consumed.
        let mut frag_starts = Vec::with_capacity(2);
        let mut frag_ends = Vec::with_capacity(2);
        if self.starts[lo] < low {
            frag_starts.push(self.starts[lo]);
            frag_ends.push(low);
        }
        if high < self.ends[hi - 1] {
            frag_starts.push(high);
            frag_ends.push(self.ends[hi - 1]);
        }
        self.starts.splice(lo..hi, frag_starts);
        self.ends.splice(lo..hi, frag_ends);
    }

    /// Check if any interval in the set overlaps with `[low, high)`.
    ///
    /// Touching at a single endpoint does not count as overlap.
    ///
    /// # Example
    /// ```rust
    /// use vec_interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(1, 3)?;
    /// set.insert(6, 7)?;
    /// assert!(set.overlaps(2, 5));
    /// assert!(set.overlaps(1, 17));
    /// assert!(!set.overlaps(3, 6));
    /// assert!(!set.overlaps(7, 23));
    /// # Ok::<(), vec_interval_set::InvalidIntervalError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn overlaps(&self, low: T, high: T) -> bool {
        let (lo, hi) = self.intersection_bound(&low, &high);
        lo < hi
    }

    /// Check if `[low, high)` lies entirely inside a single stored interval.
    ///
    /// Always `false` for empty or reversed ranges (`high <= low`).
    ///
    /// # Example
    /// ```rust
    /// use vec_interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(1, 6)?;
    /// assert!(set.covers(1, 6));
    /// assert!(set.covers(2, 4));
    /// assert!(!set.covers(0, 3));
    /// assert!(!set.covers(5, 7));
    /// # Ok::<(), vec_interval_set::InvalidIntervalError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn covers(&self, low: T, high: T) -> bool {
        let (lo, hi) = self.intersection_bound(&low, &high);
        lo < hi && self.starts[lo] <= low && high <= self.ends[lo]
    }

    /// Check if the point lies inside some stored interval.
    ///
    /// # Example
    /// ```rust
    /// use vec_interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(1, 3)?;
    /// assert!(set.contains(1));
    /// assert!(set.contains(2));
    /// assert!(!set.contains(3));
    /// # Ok::<(), vec_interval_set::InvalidIntervalError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, point: T) -> bool {
        let i = self.ends.partition_point(|e| *e <= point);
        i < self.starts.len() && self.starts[i] <= point
    }

    /// Get an iterator over the stored intervals that overlap `[low, high)`,
    /// in order.
    ///
    /// Intervals are returned verbatim, not clipped to the query range, and
    /// touching at a single endpoint does not count as overlap. An empty or
    /// reversed query yields an empty iterator.
    ///
    /// # Example
    /// ```rust
    /// use vec_interval_set::{Interval, IntervalSet};
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(1, 3)?;
    /// set.insert(5, 7)?;
    /// assert_eq!(set.overlapping(4, 5).count(), 0);
    /// assert_eq!(
    ///     set.overlapping(2, 9).collect::<Vec<_>>(),
    ///     [Interval::new(1, 3), Interval::new(5, 7)],
    /// );
    /// # Ok::<(), vec_interval_set::InvalidIntervalError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn overlapping(&self, low: T, high: T) -> Iter<'_, T> {
        let (lo, hi) = self.intersection_bound(&low, &high);
        Iter::new(&self.starts[lo..hi], &self.ends[lo..hi])
    }

    /// Collect the stored intervals that overlap `[low, high)` into a vector.
    ///
    /// Convenience for `overlapping(low, high).collect()`.
    #[inline]
    #[must_use]
    pub fn ranges_in(&self, low: T, high: T) -> Vec<Interval<T>> {
        self.overlapping(low, high).collect()
    }

    /// Get an iterator over all stored intervals, sorted ascending.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.starts, &self.ends)
    }

    /// Return a point-in-time snapshot of all stored intervals, sorted
    /// ascending.
    #[inline]
    #[must_use]
    pub fn ranges(&self) -> Vec<Interval<T>> {
        self.iter().collect()
    }

    /// Remove all intervals from the set
    #[inline]
    pub fn clear(&mut self) {
        self.starts.clear();
        self.ends.clear();
    }

    /// Return the number of stored intervals.
    ///
    /// Note that coalescing means this is the number of maximal disjoint
    /// runs, not the number of `insert` calls.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Return `true` if the set contains no intervals.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

impl<T> IntervalSet<T>
where
    T: PartialOrd + Copy,
{
    /// Insert a pre-validated interval, merging the run it overlaps or touches.
    pub(crate) fn insert_unchecked(&mut self, mut low: T, mut high: T) {
        let (lo, hi) = self.union_bound(&low, &high);
        if lo < hi {
            if self.starts[lo] < low {
                low = self.starts[lo];
            }
            if self.ends[hi - 1] > high {
                high = self.ends[hi - 1];
            }
        }
        self.starts.splice(lo..hi, std::iter::once(low));
        self.ends.splice(lo..hi, std::iter::once(high));
    }

    /// Find the index run `[lo, hi)` of stored intervals that overlap
    /// `[low, high)`. Touching intervals are excluded.
    ///
    /// `lo` is the first index whose interval ends after `low`; `hi` is the
    /// first index at or after `lo` whose interval starts at or after `high`.
    /// An empty or reversed query returns the empty run `(lo, lo)`.
    fn intersection_bound(&self, low: &T, high: &T) -> (usize, usize) {
        let lo = self.ends.partition_point(|e| e <= low);
        if !(low < high) {
            return (lo, lo);
        }
        let hi = lo + self.starts[lo..].partition_point(|s| s < high);
        (lo, hi)
    }

    /// Find the index run `[lo, hi)` of stored intervals that would merge with
    /// `[low, high)` if it were inserted.
    ///
    /// Differs from [`Self::intersection_bound`] only in using non-strict
    /// comparisons, so intervals that merely touch the query at an endpoint
    /// are part of the run. That is what makes adjacent intervals coalesce.
    fn union_bound(&self, low: &T, high: &T) -> (usize, usize) {
        let lo = self.ends.partition_point(|e| e < low);
        let hi = lo + self.starts[lo..].partition_point(|s| s <= high);
        (lo, hi)
    }
}

impl<T> Default for IntervalSet<T>
where
    T: PartialOrd + Copy,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Interval<T>> for IntervalSet<T>
where
    T: PartialOrd + Copy,
{
    #[inline]
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        for interval in iter {
            self.insert_unchecked(interval.low, interval.high);
        }
    }
}

impl<T> FromIterator<Interval<T>> for IntervalSet<T>
where
    T: PartialOrd + Copy,
{
    /// Build a set from any iterator of intervals.
    ///
    /// Seed intervals are inserted one by one, so unsorted, overlapping, or
    /// touching seed data is normalized into disjoint non-adjacent intervals.
    ///
    /// # Example
    /// ```rust
    /// use vec_interval_set::{Interval, IntervalSet};
    ///
    /// let set: IntervalSet<_> = [Interval::new(3, 5), Interval::new(1, 3)]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(set.ranges(), [Interval::new(1, 5)]);
    /// ```
    #[inline]
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T>
where
    T: PartialOrd + Copy,
{
    type Item = Interval<T>;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for IntervalSet<T>
where
    T: PartialOrd + Copy,
{
    type Item = Interval<T>;
    type IntoIter = crate::iter::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        crate::iter::IntoIter::new(self)
    }
}
