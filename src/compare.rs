//! Orderings a [`MergeableHeap`](crate::MergeableHeap) can be keyed by.

/// A strict weak ordering expressed as "is strictly worse than".
///
/// The heap keeps the element that is not worse than any other at its top.
/// Implementations must be irreflexive, asymmetric and transitive, otherwise
/// the heap order is meaningless (though memory safety is unaffected).
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` must come out of the heap after `b`.
    fn is_worse(&self, a: &T, b: &T) -> bool;
}

/// The natural order of `T`. Larger values win, so the heap is a max-heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Less;

/// The reversed natural order of `T`. Smaller values win (min-heap).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Greater;

impl<T: Ord + ?Sized> Compare<T> for Less {
    #[inline]
    fn is_worse(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: Ord + ?Sized> Compare<T> for Greater {
    #[inline]
    fn is_worse(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn is_worse(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
