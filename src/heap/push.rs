use super::*;
use crate::compare::Compare;

impl<T, C: Compare<T>> MergeableHeap<T, C> {
    /// Pushes a value onto the heap.
    ///
    /// The value becomes a single rank-0 node melded into the root, so this
    /// costs `O(log n)`.
    ///
    /// # Examples
    /// ```
    /// use mergelib::MergeableHeap;
    /// let mut heap = MergeableHeap::new();
    /// heap.push(1);
    /// heap.push(5);
    /// assert_eq!(heap.len(), 2);
    /// assert_eq!(heap.top(), Ok(&5));
    /// ```
    pub fn push(&mut self, value: T) {
        let node = Node::leaf(value);
        self.root = meld(&self.cmp, self.root.take(), Some(node));
        self.len += 1;
    }
}
