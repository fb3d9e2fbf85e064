use crate::{error::InvariantViolation, node::NodeId, tree::FingerTree};

impl<K> FingerTree<K>
where
    K: Ord,
{
    /// Assert the BST, AVL and linkage properties of the tree, returning the
    /// first violation found.
    ///
    /// This walks every node and is intended for tests and debugging; the
    /// tree maintains these properties across every public operation.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let root = match self.root_id() {
            Some(v) => v,
            None => return self.check_empty(),
        };

        if let Some(parent) = self.node(root).parent() {
            return Err(InvariantViolation::RootParent {
                node: root.index(),
                parent: parent.index(),
            });
        }

        // Perform a pre-order traversal of the tree.
        let mut reachable = 0;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            reachable += 1;
            if reachable > self.len() {
                // Only possible if the links form a cycle.
                break;
            }

            let n = self.node(id);

            // Invariant 1: every child links back to this node.
            for child in [n.left(), n.right()].into_iter().flatten() {
                let linked = self.node(child).parent();
                if linked != Some(id) {
                    return Err(InvariantViolation::ParentLink {
                        parent: id.index(),
                        child: child.index(),
                        linked: linked.map(NodeId::index),
                    });
                }
                stack.push(child);
            }

            // Invariant 2: every node records at least one insertion.
            if n.frequency() == 0 {
                return Err(InvariantViolation::Frequency { node: id.index() });
            }

            // Invariant 3: the height of this node is always +1 of the
            // maximum child height, where an absent child has height 0.
            let left = self.height_of(n.left());
            let right = self.height_of(n.right());
            let want = left.max(right) + 1;
            if n.height() != want {
                return Err(InvariantViolation::Height {
                    node: id.index(),
                    stored: n.height(),
                    want,
                });
            }

            // Invariant 4: the absolute height difference between the left
            // subtree and right subtree (the "balance factor") cannot
            // exceed 1.
            if left.abs_diff(right) > 1 {
                return Err(InvariantViolation::Balance {
                    node: id.index(),
                    left,
                    right,
                });
            }
        }

        // Invariant 5: every node in the arena is part of the tree.
        if reachable != self.len() {
            return Err(InvariantViolation::Unreachable {
                reachable,
                stored: self.len(),
            });
        }

        // Invariant 6: an in-order walk yields strictly ascending keys, which
        // holds only if every left subtree is smaller and every right subtree
        // larger than the node above it.
        let order = in_order(self, root);
        for pair in order.windows(2) {
            if self.node(pair[0]).key() >= self.node(pair[1]).key() {
                return Err(InvariantViolation::Order {
                    prev: pair[0].index(),
                    node: pair[1].index(),
                });
            }
        }

        // Invariant 7: the min and max references point at the first and last
        // nodes of the in-order walk.
        let want = order.first().copied();
        if self.min_id() != want {
            return Err(InvariantViolation::Min {
                stored: self.min_id().map(NodeId::index),
                want: want.map(NodeId::index),
            });
        }

        let want = order.last().copied();
        if self.max_id() != want {
            return Err(InvariantViolation::Max {
                stored: self.max_id().map(NodeId::index),
                want: want.map(NodeId::index),
            });
        }

        Ok(())
    }

    fn check_empty(&self) -> Result<(), InvariantViolation> {
        if !self.nodes().is_empty() {
            return Err(InvariantViolation::Unreachable {
                reachable: 0,
                stored: self.len(),
            });
        }

        if let Some(v) = self.min_id() {
            return Err(InvariantViolation::Min {
                stored: Some(v.index()),
                want: None,
            });
        }

        if let Some(v) = self.max_id() {
            return Err(InvariantViolation::Max {
                stored: Some(v.index()),
                want: None,
            });
        }

        Ok(())
    }
}

/// The node IDs of the subtree at `root` in in-order.
fn in_order<K>(t: &FingerTree<K>, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::with_capacity(t.len());
    let mut stack = vec![];
    let mut ptr = Some(root);

    loop {
        while let Some(v) = ptr {
            stack.push(v);
            ptr = t.node(v).left();
        }

        match stack.pop() {
            Some(v) => {
                out.push(v);
                ptr = t.node(v).right();
            }
            None => return out,
        }
    }
}
