use std::mem::swap;

use super::*;
use crate::compare::Compare;

/// Melds two leftist trees into one and returns its root.
///
/// Only right spines are walked: the winner keeps its left subtree and its
/// right subtree is melded with the loser. Children are swapped afterwards
/// so that the left rank stays at least the right rank, which keeps the
/// right spine within `log2(n + 1)` nodes and bounds the recursion depth.
///
/// Ties keep `x` on top.
pub(crate) fn meld<T, C: Compare<T>>(cmp: &C, x: Link<T>, y: Link<T>) -> Link<T> {
    let (mut x, mut y) = match (x, y) {
        (None, y) => return y,
        (x, None) => return x,
        (Some(x), Some(y)) => (x, y),
    };
    if cmp.is_worse(&x.value, &y.value) {
        swap(&mut x, &mut y);
    }
    let right = x.right.take();
    x.right = meld(cmp, right, Some(y));
    if rank(&x.left) < rank(&x.right) {
        swap(&mut x.left, &mut x.right);
    }
    // rank follows the right child so the right spine stays within log2(n + 1)
    x.rank = rank(&x.right) + 1;
    Some(x)
}
