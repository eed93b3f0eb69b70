use thiserror::Error;

/// Failures reported by [`MergeableHeap`](crate::MergeableHeap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `top` or `pop` was called on a heap holding no elements.
    #[error("container is empty")]
    EmptyContainer,
}
