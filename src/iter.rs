use std::iter::FusedIterator;

use crate::interval::Interval;
use crate::intervalset::IntervalSet;

/// An iterator over the intervals of an `IntervalSet`, sorted ascending.
///
/// Returned by [`IntervalSet::iter`] and, sliced to the affected run, by
/// [`IntervalSet::overlapping`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    /// Low endpoints of the remaining intervals
    starts: &'a [T],
    /// High endpoints of the remaining intervals
    ends: &'a [T],
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(starts: &'a [T], ends: &'a [T]) -> Self {
        debug_assert_eq!(starts.len(), ends.len());
        Iter { starts, ends }
    }
}

impl<T> Iterator for Iter<'_, T>
where
    T: Copy,
{
    type Item = Interval<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (&low, starts) = self.starts.split_first()?;
        let (&high, ends) = self.ends.split_first()?;
        self.starts = starts;
        self.ends = ends;
        Some(Interval { low, high })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.starts.len(), Some(self.starts.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T>
where
    T: Copy,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let (&low, starts) = self.starts.split_last()?;
        let (&high, ends) = self.ends.split_last()?;
        self.starts = starts;
        self.ends = ends;
        Some(Interval { low, high })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> where T: Copy {}

impl<T> FusedIterator for Iter<'_, T> where T: Copy {}

/// An owning iterator over the intervals of an `IntervalSet`.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: std::iter::Zip<std::vec::IntoIter<T>, std::vec::IntoIter<T>>,
}

impl<T> IntoIter<T>
where
    T: PartialOrd + Copy,
{
    pub(crate) fn new(set: IntervalSet<T>) -> Self {
        IntoIter {
            inner: set.starts.into_iter().zip(set.ends),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = Interval<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(low, high)| Interval { low, high })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(low, high)| Interval { low, high })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
