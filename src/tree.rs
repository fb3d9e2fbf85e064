use tracing::{debug, trace};

use crate::{
    finger::Position,
    iter::Iter,
    node::{Node, NodeId},
};

/// Instrumentation counters accumulated by insertions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Counters {
    /// Nodes entered while locating insertion points.
    pub(crate) search_visits: usize,

    /// Height changes observed by the post-insertion walk, excluding those
    /// made inside a rotation.
    pub(crate) rebalance_events: usize,

    /// Single rotations performed (a double rotation counts twice).
    pub(crate) rotations: usize,
}

/// The output of [`FingerTree::bulk_load_and_sort()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport<K> {
    /// The inserted keys in ascending order, duplicates included.
    pub sorted: Vec<K>,

    /// Height-change events counted while rebalancing.
    pub rebalance_events: usize,

    /// Nodes visited while searching for insertion points.
    pub search_visits: usize,

    /// Single rotations performed while rebalancing.
    pub rotations: usize,
}

impl<K> From<SortReport<K>> for (Vec<K>, usize, usize) {
    fn from(v: SortReport<K>) -> Self {
        (v.sorted, v.rebalance_events, v.search_visits)
    }
}

/// An AVL tree that starts every insertion search at its maximum key.
///
/// Inserting a key already present increments its frequency rather than
/// adding a node, so the tree behaves as an ordered multiset.
///
/// Insertions arriving in (nearly) ascending order land on or close to the
/// maximum node, reaching their position in a handful of steps instead of the
/// `O(log n)` descent from the root.
#[derive(Debug, Clone)]
pub struct FingerTree<K> {
    /// Node arena. Child and parent links are indexes into this set.
    nodes: Vec<Node<K>>,

    root: Option<NodeId>,

    /// The nodes holding the smallest and largest key. `max` is the finger.
    min: Option<NodeId>,
    max: Option<NodeId>,

    pub(crate) counters: Counters,
}

impl<K> Default for FingerTree<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            min: None,
            max: None,
            counters: Counters::default(),
        }
    }
}

impl<K> FingerTree<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty tree with space for `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// The number of distinct keys in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of keys inserted, including duplicates.
    pub fn total(&self) -> usize {
        self.nodes.iter().map(|v| v.frequency()).sum()
    }

    /// The height of the tree; 0 when empty and 1 for a single key.
    pub fn height(&self) -> usize {
        self.height_of(self.root) as usize
    }

    /// The key held by the root node, if any.
    pub fn root(&self) -> Option<&K> {
        self.root.map(|v| self.node(v).key())
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.min.map(|v| self.node(v).key())
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.max.map(|v| self.node(v).key())
    }

    /// Nodes visited by searches since the counters were last reset.
    pub fn search_visits(&self) -> usize {
        self.counters.search_visits
    }

    /// Rebalancing height-change events since the counters were last reset.
    pub fn rebalance_events(&self) -> usize {
        self.counters.rebalance_events
    }

    /// Single rotations performed since the counters were last reset.
    pub fn rotations(&self) -> usize {
        self.counters.rotations
    }

    /// Remove all keys and reset the counters.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.min = None;
        self.max = None;
        self.counters = Counters::default();
    }

    /// Iterate over `(key, frequency)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.nodes, self.root)
    }

    /// Materialise the keys in ascending order, repeating each key by the
    /// number of times it was inserted.
    // repeat_n() requires Rust 1.82.
    #[allow(clippy::manual_repeat_n)]
    pub fn to_sorted_sequence(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.total());
        for (key, frequency) in self.iter() {
            out.extend(std::iter::repeat(key).take(frequency).cloned());
        }
        out
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn nodes(&self) -> &[Node<K>] {
        &self.nodes
    }

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    pub(crate) fn min_id(&self) -> Option<NodeId> {
        self.min
    }

    pub(crate) fn max_id(&self) -> Option<NodeId> {
        self.max
    }

    /// Height of the subtree at `id`, where an absent subtree has height 0.
    pub(crate) fn height_of(&self, id: Option<NodeId>) -> u8 {
        id.map(|v| self.node(v).height()).unwrap_or_default()
    }

    pub(crate) fn push(&mut self, node: Node<K>) -> NodeId {
        assert!(
            self.nodes.len() < u32::MAX as usize,
            "node arena is full ({} nodes)",
            self.nodes.len()
        );
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

impl<K> FingerTree<K>
where
    K: Ord,
{
    /// Insert `key`, returning `true` if it was not already present.
    ///
    /// The search for the insertion point begins at the maximum node (the
    /// finger), climbs towards the root while the key is not greater than the
    /// next ancestor, then descends. Every node entered on the way is counted
    /// once in [`FingerTree::search_visits()`].
    pub fn insert(&mut self, key: K) -> bool {
        let finger = match self.max {
            Some(v) => v,
            None => {
                // The new root is the only node entered.
                let id = self.push(Node::new(key, None));
                self.root = Some(id);
                self.min = Some(id);
                self.max = Some(id);
                self.counters.search_visits += 1;
                return true;
            }
        };

        let (position, visits) = self.locate_from(finger, &key);
        self.counters.search_visits += visits;

        let (parent, side) = match position {
            Position::Occupied(id) => {
                self.node_mut(id).bump();
                return false;
            }
            Position::Vacant { parent, side } => (parent, side),
        };

        let id = self.push(Node::new(key, Some(parent)));
        self.node_mut(parent).set_child(side, Some(id));
        trace!(node = id.index(), parent = parent.index(), ?side, "attached node");

        self.track_extremes(id);
        self.rebalance_from(parent);

        true
    }

    /// Number of times `key` has been inserted, or [`None`] if absent.
    pub fn frequency(&self, key: &K) -> Option<usize> {
        self.search(key).frequency
    }

    pub fn contains(&self, key: &K) -> bool {
        self.frequency(key).is_some()
    }

    /// Reset the tree and counters, insert every key of `keys` in order, and
    /// return the sorted keys alongside the counters for the batch.
    pub fn bulk_load_and_sort<I>(&mut self, keys: I) -> SortReport<K>
    where
        I: IntoIterator<Item = K>,
        K: Clone,
    {
        self.clear();

        let mut n_keys = 0_usize;
        for key in keys {
            self.insert(key);
            n_keys += 1;
        }

        let report = SortReport {
            sorted: self.to_sorted_sequence(),
            rebalance_events: self.counters.rebalance_events,
            search_visits: self.counters.search_visits,
            rotations: self.counters.rotations,
        };

        debug!(
            n_keys,
            distinct = self.len(),
            height = self.height(),
            search_visits = report.search_visits,
            rebalance_events = report.rebalance_events,
            rotations = report.rotations,
            "bulk load complete"
        );

        report
    }

    /// Move the min/max references to `id` if it holds a new extreme key.
    fn track_extremes(&mut self, id: NodeId) {
        let key = self.node(id).key();

        let below_min = self.min.map(|v| key < self.node(v).key()).unwrap_or(true);
        let above_max = self.max.map(|v| key > self.node(v).key()).unwrap_or(true);

        if below_min {
            self.min = Some(id);
        }
        if above_max {
            self.max = Some(id);
        }
    }
}

impl<K> FromIterator<K> for FingerTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<K> Extend<K> for FingerTree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a FingerTree<K> {
    type Item = (&'a K, usize);
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
