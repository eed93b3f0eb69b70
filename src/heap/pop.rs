use super::*;
use crate::{compare::Compare, error::QueueError};

impl<T, C: Compare<T>> MergeableHeap<T, C> {
    /// Removes the extremal element and returns it.
    ///
    /// The root's two subtrees are melded into the new root. Nothing is
    /// touched when the heap is empty, so a failed call can be retried.
    ///
    /// # Errors
    /// [`QueueError::EmptyContainer`] if the heap holds no elements.
    ///
    /// # Examples
    /// ```
    /// use mergelib::{MergeableHeap, QueueError};
    /// let mut heap = MergeableHeap::new();
    /// heap.push(1);
    /// heap.push(3);
    /// assert_eq!(heap.pop(), Ok(3));
    /// assert_eq!(heap.pop(), Ok(1));
    /// assert_eq!(heap.pop(), Err(QueueError::EmptyContainer));
    /// ```
    pub fn pop(&mut self) -> Result<T, QueueError> {
        let root = self.root.take().ok_or(QueueError::EmptyContainer)?;
        let Node {
            value, left, right, ..
        } = *root;
        self.root = meld(&self.cmp, left, right);
        self.len -= 1;
        Ok(value)
    }
}
