use super::*;

/// Frees a whole tree, children before parents, without recursing.
///
/// Left spines are unbounded in a leftist heap, so the default recursive
/// drop of `Box<Node<T>>` could run out of stack.
pub(crate) fn release<T>(root: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<T, C> Drop for MergeableHeap<T, C> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}
