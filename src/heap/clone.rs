use super::*;

/// Deep-copies a tree.
///
/// Nodes are collected in preorder with an explicit stack and rebuilt in
/// reverse preorder, so both subtrees of a node are finished (and sit on top
/// of `built`, left above right) by the time the node itself is copied.
fn clone_tree<T: Clone>(root: &Link<T>) -> Link<T> {
    let mut preorder: Vec<&Node<T>> = Vec::new();
    let mut pending: Vec<&Node<T>> = root.as_deref().into_iter().collect();
    while let Some(node) = pending.pop() {
        preorder.push(node);
        pending.extend(node.right.as_deref());
        pending.extend(node.left.as_deref());
    }
    let mut built: Vec<Box<Node<T>>> = Vec::new();
    for node in preorder.into_iter().rev() {
        let left = node.left.as_ref().and_then(|_| built.pop());
        let right = node.right.as_ref().and_then(|_| built.pop());
        built.push(Box::new(Node {
            value: node.value.clone(),
            rank: node.rank,
            left,
            right,
        }));
    }
    debug_assert!(built.len() <= 1);
    built.pop()
}

impl<T: Clone, C: Clone> Clone for MergeableHeap<T, C> {
    fn clone(&self) -> Self {
        MergeableHeap {
            root: clone_tree(&self.root),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }

    /// Frees the current tree, then deep-copies `source`.
    fn clone_from(&mut self, source: &Self) {
        release(self.root.take());
        self.len = 0;
        self.root = clone_tree(&source.root);
        self.len = source.len;
        self.cmp = source.cmp.clone();
    }
}
