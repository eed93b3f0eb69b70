use tracing::debug;

use super::*;

impl<T, C> MergeableHeap<T, C> {
    /// Returns the number of elements in the heap.
    ///
    /// # Examples
    /// ```
    /// use mergelib::MergeableHeap;
    /// let mut heap = MergeableHeap::new();
    /// assert_eq!(heap.len(), 0);
    /// heap.push(1);
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }
    /// Checks if the heap is empty.
    ///
    /// # Examples
    /// ```
    /// use mergelib::MergeableHeap;
    /// let mut heap = MergeableHeap::new();
    /// assert!(heap.is_empty());
    /// heap.push(1);
    /// assert!(!heap.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Drops every element, leaving an empty heap.
    ///
    /// # Examples
    /// ```
    /// use mergelib::MergeableHeap;
    /// let mut heap: MergeableHeap<i32> = (0..10).collect();
    /// heap.clear();
    /// assert!(heap.is_empty());
    /// ```
    pub fn clear(&mut self) {
        debug!(len = self.len, "clearing heap");
        release(self.root.take());
        self.len = 0;
    }
}

#[cfg(test)]
impl<T, C: crate::compare::Compare<T>> MergeableHeap<T, C> {
    /// Walks the whole tree and asserts heap order, ranks and the count.
    pub fn check(&self) {
        let mut count = 0;
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                assert!(!self.cmp.is_worse(&node.value, &child.value));
                stack.push(child);
            }
            assert!(rank(&node.left) >= rank(&node.right));
            assert_eq!(node.rank, rank(&node.right) + 1);
        }
        assert_eq!(count, self.len);
    }

    /// Number of nodes on the path following right children from the root.
    pub fn right_spine(&self) -> usize {
        let mut len = 0;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            len += 1;
            cursor = node.right.as_deref();
        }
        len
    }
}
