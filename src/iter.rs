use crate::node::{Node, NodeId};

/// An in-order iterator over the `(key, frequency)` pairs of a
/// [`FingerTree`](crate::FingerTree), yielded in ascending key order.
#[derive(Debug)]
pub struct Iter<'a, K> {
    nodes: &'a [Node<K>],
    stack: Vec<NodeId>,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(nodes: &'a [Node<K>], root: Option<NodeId>) -> Self {
        let mut this = Self {
            nodes,
            stack: vec![],
        };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: Option<NodeId>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = self.nodes[v.index()].left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = (&'a K, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let v = &nodes[self.stack.pop()?.index()];

        // Descend down the left side of the right hand child of this node, if
        // any.
        self.push_subtree(v.right());

        Some((v.key(), v.frequency()))
    }
}
