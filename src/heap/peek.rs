use super::*;
use crate::error::QueueError;

impl<T, C> MergeableHeap<T, C> {
    /// Returns the extremal element, the one `pop` would remove next.
    ///
    /// # Errors
    /// [`QueueError::EmptyContainer`] if the heap holds no elements.
    ///
    /// # Examples
    /// ```
    /// use mergelib::{MergeableHeap, QueueError};
    /// let mut heap = MergeableHeap::new();
    /// assert_eq!(heap.top(), Err(QueueError::EmptyContainer));
    /// heap.push(3);
    /// heap.push(8);
    /// assert_eq!(heap.top(), Ok(&8));
    /// ```
    pub fn top(&self) -> Result<&T, QueueError> {
        self.root
            .as_ref()
            .map(|node| &node.value)
            .ok_or(QueueError::EmptyContainer)
    }
}
