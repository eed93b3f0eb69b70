use std::collections::VecDeque;

use super::*;
use crate::compare::Compare;

/// Builds one tree out of `values` in linear time.
///
/// Every value starts as a singleton; the two oldest trees in the queue are
/// melded and the result goes to the back, until one tree is left.
fn build<T, C: Compare<T>>(cmp: &C, values: impl IntoIterator<Item = T>) -> (Link<T>, usize) {
    let mut queue: VecDeque<Box<Node<T>>> = values.into_iter().map(Node::leaf).collect();
    let len = queue.len();
    while let Some(x) = queue.pop_front() {
        let Some(y) = queue.pop_front() else {
            return (Some(x), len);
        };
        if let Some(tree) = meld(cmp, Some(x), Some(y)) {
            queue.push_back(tree);
        }
    }
    (None, len)
}

impl<T, C: Compare<T> + Default> FromIterator<T> for MergeableHeap<T, C> {
    /// # Examples
    /// ```
    /// use mergelib::{Greater, MergeableHeap};
    /// let heap: MergeableHeap<i32, Greater> = vec![4, 2, 9].into_iter().collect();
    /// assert_eq!(heap.top(), Ok(&2));
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        let (root, len) = build(&heap.cmp, iter);
        heap.root = root;
        heap.len = len;
        heap
    }
}

impl<T, C: Compare<T>> Extend<T> for MergeableHeap<T, C> {
    /// Builds the new values into a tree of their own, then melds it in.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let (tree, added) = build(&self.cmp, iter);
        self.root = meld(&self.cmp, self.root.take(), tree);
        self.len += added;
    }
}

impl<T: Ord> From<Vec<T>> for MergeableHeap<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}
