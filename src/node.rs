/// Index of a [`Node`] within the tree's node arena.
///
/// Nodes are never removed from the arena individually, so an index stays
/// valid until the whole tree is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        // Invariant: the arena never grows beyond u32::MAX nodes (enforced by
        // the tree when pushing).
        debug_assert!(index <= u32::MAX as usize);
        Self(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// The side of a parent a child is (or will be) linked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// Child node links.
    left: Option<NodeId>,
    right: Option<NodeId>,

    /// Back-link to the node holding this node as a child, or [`None`] for
    /// the root.
    parent: Option<NodeId>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an absent child counts as 0.
    ///
    /// A u8 holds a maximum value of 255, far beyond the height of any AVL
    /// tree that fits in memory.
    height: u8,

    /// Number of times `key` has been inserted.
    frequency: usize,

    key: K,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K, parent: Option<NodeId>) -> Self {
        Self {
            key,
            frequency: 1,
            left: None,
            right: None,
            parent,
            height: 1,
        }
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn frequency(&self) -> usize {
        self.frequency
    }

    /// Record one more insertion of this node's key.
    pub(crate) fn bump(&mut self) -> usize {
        self.frequency += 1;
        self.frequency
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn set_height(&mut self, height: u8) {
        self.height = height;
    }

    pub(crate) fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub(crate) fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// Returns the side `child` hangs off this node, if it is a child at all.
    pub(crate) fn side_of(&self, child: NodeId) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
}
