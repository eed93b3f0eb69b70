use std::fmt::{self, Debug};

use super::*;

impl<T: Debug, C> Debug for MergeableHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeableHeap")
            .field("len", &self.len)
            .field("top", &self.root.as_ref().map(|node| &node.value))
            .finish()
    }
}
