use std::iter::FusedIterator;

use super::*;
use crate::compare::Compare;

impl<T, C: Compare<T>> MergeableHeap<T, C> {
    /// Consumes the heap and returns its elements in the order `pop` would
    /// produce them, best first.
    ///
    /// # Examples
    /// ```
    /// use mergelib::MergeableHeap;
    /// let heap: MergeableHeap<i32> = vec![5, 3, 8, 1].into_iter().collect();
    /// assert_eq!(heap.into_sorted_vec(), vec![8, 5, 3, 1]);
    /// ```
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len);
        vec.extend(self);
        vec
    }
}

/// Owning iterator that pops the heap until it is empty.
///
/// Created by [`MergeableHeap::into_iter`].
pub struct IntoIter<T, C> {
    heap: MergeableHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len, Some(self.heap.len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C: Compare<T>> FusedIterator for IntoIter<T, C> {}

impl<T, C: Compare<T>> IntoIterator for MergeableHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    /// Yields the elements in extraction order, best first.
    fn into_iter(self) -> IntoIter<T, C> {
        IntoIter { heap: self }
    }
}
