use crate::compare::Less;

/// A mergeable priority queue built as a leftist heap.
///
/// The element that is not worse than any other under `C` sits at the top.
/// With the default [`Less`] ordering that is the maximum; use
/// [`Greater`](crate::Greater) for a min-heap, or any
/// `Fn(&T, &T) -> bool` through [`with_comparator`](MergeableHeap::with_comparator).
///
/// The heap exclusively owns its nodes. [`Clone`] deep-copies them and
/// [`merge`](MergeableHeap::merge) moves them out of the argument.
pub struct MergeableHeap<T, C = Less> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
    pub(crate) cmp: C,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    /// 1 + rank of the right child. Leaves are 0.
    pub(crate) rank: i32,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn leaf(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            rank: 0,
            left: None,
            right: None,
        })
    }
}

/// Rank of a possibly absent subtree, -1 for `None`.
#[inline]
pub(crate) fn rank<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(-1, |node| node.rank)
}

mod construct;
mod meld;
mod push;
mod peek;
mod pop;
mod merge;
mod property;
mod clone;
mod debug;
mod default;
mod drop;
mod from;
mod into;

pub use into::IntoIter;
pub(crate) use drop::release;
pub(crate) use meld::meld;
