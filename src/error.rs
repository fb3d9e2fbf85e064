use thiserror::Error;

/// A structural invariant of a [`FingerTree`](crate::FingerTree) that does not
/// hold, as reported by
/// [`FingerTree::check_invariants()`](crate::FingerTree::check_invariants).
///
/// Nodes are identified by their index in the tree's node arena, which is the
/// order their keys were first inserted in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// An in-order walk found a key not strictly greater than its
    /// predecessor.
    #[error("node {node} is not ordered after node {prev}")]
    Order { prev: usize, node: usize },

    /// The subtree heights of a node's children differ by more than 1.
    #[error("node {node} is unbalanced (left height {left}, right height {right})")]
    Balance { node: usize, left: u8, right: u8 },

    /// The cached height is not 1 more than the tallest child.
    #[error("node {node} has height {stored}, want {want}")]
    Height { node: usize, stored: u8, want: u8 },

    /// A child does not link back to the node holding it.
    #[error("node {child} is a child of node {parent} but links to {linked:?}")]
    ParentLink {
        parent: usize,
        child: usize,
        linked: Option<usize>,
    },

    /// The root node has a parent.
    #[error("root node {node} links to parent {parent}")]
    RootParent { node: usize, parent: usize },

    /// A node records zero insertions.
    #[error("node {node} has a frequency of zero")]
    Frequency { node: usize },

    /// The minimum reference does not point at the smallest key.
    #[error("min references {stored:?}, want {want:?}")]
    Min {
        stored: Option<usize>,
        want: Option<usize>,
    },

    /// The maximum reference (the finger) does not point at the largest key.
    #[error("max references {stored:?}, want {want:?}")]
    Max {
        stored: Option<usize>,
        want: Option<usize>,
    },

    /// Nodes exist that cannot be reached from the root.
    #[error("{reachable} of {stored} nodes are reachable from the root")]
    Unreachable { reachable: usize, stored: usize },
}
