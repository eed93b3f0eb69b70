use super::*;
use crate::compare::Compare;

impl<T: Ord> MergeableHeap<T> {
    /// Creates an empty max-heap ordered by `T`'s natural order.
    ///
    /// # Examples
    /// ```
    /// use mergelib::MergeableHeap;
    /// let mut heap = MergeableHeap::new();
    /// heap.push(4);
    /// assert_eq!(heap.top(), Ok(&4));
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }
}

impl<T, C: Compare<T>> MergeableHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`.
    ///
    /// # Examples
    /// ```
    /// use mergelib::MergeableHeap;
    /// let mut heap = MergeableHeap::with_comparator(|a: &i32, b: &i32| a.abs() < b.abs());
    /// heap.push(3);
    /// heap.push(-7);
    /// assert_eq!(heap.top(), Ok(&-7));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        MergeableHeap {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// The ordering this heap was built with.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }
}
