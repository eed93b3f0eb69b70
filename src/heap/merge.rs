use std::mem::replace;

use tracing::trace;

use super::*;
use crate::compare::Compare;

impl<T, C: Compare<T>> MergeableHeap<T, C> {
    /// Moves every element of `other` into `self` in `O(log n)`.
    ///
    /// No element is copied: `other`'s nodes are relinked under `self` and
    /// `other` is left as a valid empty heap. The result is ordered by
    /// `self`'s comparator.
    ///
    /// Merging a heap with itself cannot be written, since `self` and
    /// `other` are both exclusive borrows.
    ///
    /// # Examples
    /// ```
    /// use mergelib::MergeableHeap;
    /// let mut a: MergeableHeap<i32> = [5, 1].into_iter().collect();
    /// let mut b: MergeableHeap<i32> = [8, 3].into_iter().collect();
    /// a.merge(&mut b);
    /// assert_eq!(a.len(), 4);
    /// assert!(b.is_empty());
    /// assert_eq!(a.top(), Ok(&8));
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        let absorbed = replace(&mut other.len, 0);
        let other_root = other.root.take();
        trace!(len = self.len, absorbed, "merging heaps");
        self.root = meld(&self.cmp, self.root.take(), other_root);
        self.len += absorbed;
    }
}
