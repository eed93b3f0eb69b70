use super::*;
use crate::compare::Compare;

impl<T, C: Compare<T> + Default> Default for MergeableHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}
