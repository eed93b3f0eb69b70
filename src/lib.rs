//! A mergeable priority queue.
//!
//! [`MergeableHeap`] is a leftist heap: a binary tree of exclusively owned
//! nodes where every node carries a rank that keeps the right spine short.
//! Pushing, popping and merging two whole heaps all reduce to one melding
//! routine whose cost follows the right spines, so each runs in
//! `O(log n)`.
//!
//! # Examples
//! ```
//! use mergelib::MergeableHeap;
//!
//! let mut a: MergeableHeap<i32> = [5, 1].into_iter().collect();
//! let mut b: MergeableHeap<i32> = [8, 3].into_iter().collect();
//! a.merge(&mut b);
//! assert!(b.is_empty());
//! assert_eq!(a.into_sorted_vec(), vec![8, 5, 3, 1]);
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod heap;
pub mod script;

#[cfg(test)]
mod tests;

pub use compare::{Compare, Greater, Less};
pub use error::QueueError;
pub use heap::MergeableHeap;
