use std::cmp::Ordering;

use crate::{
    node::{NodeId, Side},
    tree::FingerTree,
};

/// Where a key belongs in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    /// The key is held by this node.
    Occupied(NodeId),

    /// The key is absent, and would be linked as the `side` child of
    /// `parent`.
    Vacant { parent: NodeId, side: Side },
}

/// The outcome of a read-only key lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Search {
    /// The key's frequency, or [`None`] if the key is not in the tree.
    pub frequency: Option<usize>,

    /// The number of nodes entered to reach the answer.
    pub visits: usize,
}

impl<K> FingerTree<K>
where
    K: Ord,
{
    /// Look up `key` with a standard descent from the root.
    pub fn search(&self, key: &K) -> Search {
        let root = match self.root_id() {
            Some(v) => v,
            None => {
                return Search {
                    frequency: None,
                    visits: 0,
                }
            }
        };

        let (position, visits) = self.descend(root, key);
        self.search_result(position, visits + 1)
    }

    /// Look up `key` starting from the maximum node, climbing and descending
    /// exactly as an insertion of `key` would.
    ///
    /// Comparing the visits against [`FingerTree::search()`] gives the cost
    /// of a finger search relative to a root search for the same key.
    ///
    /// An empty tree has no finger and reports 0 visits, whereas inserting
    /// into an empty tree counts the new root as 1.
    pub fn finger_search(&self, key: &K) -> Search {
        let finger = match self.max_id() {
            Some(v) => v,
            None => {
                return Search {
                    frequency: None,
                    visits: 0,
                }
            }
        };

        let (position, visits) = self.locate_from(finger, key);
        self.search_result(position, visits)
    }

    /// Find the position of `key` starting at `finger`, returning it with the
    /// number of nodes entered.
    ///
    /// `finger` must be the maximum node. Keys greater than it are resolved
    /// immediately to its (empty) right slot. Otherwise the search climbs
    /// while `key` is not greater than the next ancestor, so the anchor it
    /// stops at is the root of the smallest subtree on the right spine that
    /// can contain `key`, and descends from there.
    ///
    /// ```text
    ///
    ///          4            insert 5: start at the finger 8 (1), climb to
    ///         / \           6 (2) because 5 <= 6, stop below 4 because
    ///        2   6          5 > 4, then descend from 6 to its empty left
    ///       / \   \         slot.
    ///      1   3   8  <- finger
    /// ```
    ///
    /// The anchor is counted once, whether it was reached by climbing or is
    /// the finger itself.
    pub(crate) fn locate_from(&self, finger: NodeId, key: &K) -> (Position, usize) {
        // Invariant: the finger is the right-most node.
        debug_assert!(self.node(finger).right().is_none());

        let mut visits = 1;

        match key.cmp(self.node(finger).key()) {
            Ordering::Greater => {
                let position = Position::Vacant {
                    parent: finger,
                    side: Side::Right,
                };
                return (position, visits);
            }
            Ordering::Equal => return (Position::Occupied(finger), visits),
            Ordering::Less => {}
        }

        // Climb while the key could still be held by, or left of, the parent.
        //
        // Climbing onto a parent holding an equal key is required: stopping
        // below it would descend into a subtree of strictly greater keys.
        let mut anchor = finger;
        while let Some(parent) = self.node(anchor).parent() {
            if key > self.node(parent).key() {
                break;
            }
            anchor = parent;
            visits += 1;
        }

        let (position, descended) = self.descend(anchor, key);
        (position, visits + descended)
    }

    /// Standard BST descent from `from`, returning the position of `key` and
    /// the number of nodes entered below `from` (which is not counted).
    fn descend(&self, from: NodeId, key: &K) -> (Position, usize) {
        let mut visits = 0;
        let mut ptr = from;

        loop {
            let n = self.node(ptr);
            let side = match key.cmp(n.key()) {
                Ordering::Less => Side::Left,
                Ordering::Equal => return (Position::Occupied(ptr), visits),
                Ordering::Greater => Side::Right,
            };

            match n.child(side) {
                Some(v) => {
                    ptr = v;
                    visits += 1;
                }
                None => return (Position::Vacant { parent: ptr, side }, visits),
            }
        }
    }

    fn search_result(&self, position: Position, visits: usize) -> Search {
        let frequency = match position {
            Position::Occupied(id) => Some(self.node(id).frequency()),
            Position::Vacant { .. } => None,
        };

        Search { frequency, visits }
    }
}
