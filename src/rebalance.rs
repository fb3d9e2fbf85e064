use tracing::trace;

use crate::{
    node::{NodeId, Side},
    tree::FingerTree,
};

impl<K> FingerTree<K> {
    /// Walk from `start` to the root, recomputing each node's height and
    /// rotating any node whose balance factor has reached 2.
    ///
    /// A height change observed by this walk is counted as a rebalance event
    /// only when the node it was observed on is itself balanced. Height
    /// changes made inside a rotation are never counted.
    pub(crate) fn rebalance_from(&mut self, start: NodeId) {
        let mut ptr = Some(start);

        while let Some(id) = ptr {
            update_height_counted(self, id);

            match balance(self, id) {
                // Left-heavy
                (2..) => {
                    if let Some(left) = self.node(id).left() {
                        if balance(self, left) < 0 {
                            self.rotate_left(left);
                        }
                    }
                    self.rotate_right(id);
                }
                // Right-heavy
                (..=-2) => {
                    if let Some(right) = self.node(id).right() {
                        if balance(self, right) > 0 {
                            self.rotate_right(right);
                        }
                    }
                    self.rotate_left(id);
                }

                #[allow(clippy::manual_range_patterns)]
                -1 | 0 | 1 => { /* balanced */ }
            }

            // After a rotation this is the pivot that replaced "id".
            ptr = self.node(id).parent();
        }
    }

    /// Left rotate the subtree rooted at `x` around the pivot point `P`.
    ///
    /// ```text
    ///
    ///      x
    ///     / \                               P
    ///    1   P         Rotate Left        /   \
    ///       / \      --------------->    x     y
    ///      2   y                        / \   / \
    ///         / \                      1   2 3   4
    ///        3   4
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `x` has no right child (cannot be rotated).
    pub(crate) fn rotate_left(&mut self, x: NodeId) {
        let p = self
            .node(x)
            .right()
            .expect("left rotation requires a right child");
        self.rotate(x, p, Side::Left);
    }

    /// Right rotate the subtree rooted at `y` around the pivot point `P`.
    ///
    /// ```text
    ///          y
    ///         / \                           P
    ///        P   4     Rotate Right       /   \
    ///       / \      --------------->    x     y
    ///      x   3                        / \   / \
    ///     / \                          1   2 3   4
    ///    1   2
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `y` has no left child (cannot be rotated).
    pub(crate) fn rotate_right(&mut self, y: NodeId) {
        let p = self
            .node(y)
            .left()
            .expect("right rotation requires a left child");
        self.rotate(y, p, Side::Right);
    }

    /// Lift the pivot `p` into the place of its parent `n`, moving `n` down
    /// to the `direction` side of `p`.
    fn rotate(&mut self, n: NodeId, p: NodeId, direction: Side) {
        let inward = direction;
        let outward = opposite(direction);

        debug_assert_eq!(self.node(n).child(outward), Some(p));
        debug_assert_eq!(self.node(p).parent(), Some(n));

        let parent = self.node(n).parent();

        // The pivot's inner subtree moves across to "n".
        let inner = self.node(p).child(inward);
        self.node_mut(n).set_child(outward, inner);
        if let Some(inner) = inner {
            self.node_mut(inner).set_parent(Some(n));
        }

        // The pivot takes the place of "n" below its parent.
        self.replace_child(parent, n, p);
        self.node_mut(p).set_parent(parent);

        self.node_mut(p).set_child(inward, Some(n));
        self.node_mut(n).set_parent(Some(p));

        // Order matters: "n" is now a child of "p".
        update_height(self, n);
        update_height(self, p);

        self.counters.rotations += 1;
        trace!(node = n.index(), pivot = p.index(), ?direction, "rotated");
    }

    /// Point whichever link referenced `old` at `new` instead, which is the
    /// root when `parent` is [`None`].
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        let parent = match parent {
            Some(v) => v,
            None => {
                debug_assert_eq!(self.root_id(), Some(old));
                self.set_root(Some(new));
                return;
            }
        };

        match self.node(parent).side_of(old) {
            Some(side) => self.node_mut(parent).set_child(side, Some(new)),
            None => unreachable!("parent link does not point back to child"),
        }
    }
}

fn opposite(side: Side) -> Side {
    match side {
        Side::Left => Side::Right,
        Side::Right => Side::Left,
    }
}

/// Compute the "balance factor" of the subtree rooted at `id`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<K>(t: &FingerTree<K>, id: NodeId) -> i8 {
    let n = t.node(id);

    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (t.height_of(n.left()) as i16 - t.height_of(n.right()) as i16) as i8
}

fn child_heights<K>(t: &FingerTree<K>, id: NodeId) -> (u8, u8) {
    let n = t.node(id);
    (t.height_of(n.left()), t.height_of(n.right()))
}

/// Recompute the height of `id` from its children without touching the
/// counters. Used by rotations.
fn update_height<K>(t: &mut FingerTree<K>, id: NodeId) {
    let (left, right) = child_heights(t, id);
    t.node_mut(id).set_height(left.max(right) + 1);
}

/// Recompute the height of `id` from its children during the rebalancing walk,
/// counting a rebalance event if the height changed on a node that does not
/// itself need a rotation.
fn update_height_counted<K>(t: &mut FingerTree<K>, id: NodeId) {
    let (left, right) = child_heights(t, id);
    let height = left.max(right) + 1;
    let skew = left as i16 - right as i16;

    if height != t.node(id).height() && skew.abs() < 2 {
        t.counters.rebalance_events += 1;
    }

    t.node_mut(id).set_height(height);
}
