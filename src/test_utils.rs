use std::fmt::{Display, Write};

use proptest::prelude::*;

use crate::{
    node::{Node, NodeId, Side},
    FingerTree,
};

const KEY_MAX: i32 = 64;

/// Generate up to `n` keys from a small domain [0..[`KEY_MAX`]), so that
/// duplicates are common.
pub(crate) fn arbitrary_keys(n: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0..KEY_MAX, 0..n)
}

/// Generate an ascending run of up to `n` keys in which some disjoint pairs of
/// neighbours have been swapped.
pub(crate) fn near_sorted_keys(n: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<bool>(), 0..n).prop_map(|swaps| {
        let mut keys = (0..swaps.len() as i32).collect::<Vec<_>>();

        let mut i = 0;
        while i + 1 < keys.len() {
            if swaps[i] {
                keys.swap(i, i + 1);
                i += 2;
            } else {
                i += 1;
            }
        }

        keys
    })
}

/// Construct a tree holding a single root node with `key`.
///
/// Hand-built trees do not maintain the min/max references or counters.
pub(crate) fn new_root<K>(key: K) -> (FingerTree<K>, NodeId) {
    let mut t = FingerTree::new();
    let id = t.push(Node::new(key, None));
    t.set_root(Some(id));
    (t, id)
}

fn add_child<K>(t: &mut FingerTree<K>, parent: NodeId, side: Side, key: K) -> NodeId {
    assert!(t.node(parent).child(side).is_none());
    let id = t.push(Node::new(key, Some(parent)));
    t.node_mut(parent).set_child(side, Some(id));
    id
}

pub(crate) fn add_left<K>(t: &mut FingerTree<K>, parent: NodeId, key: K) -> NodeId {
    add_child(t, parent, Side::Left, key)
}

pub(crate) fn add_right<K>(t: &mut FingerTree<K>, parent: NodeId, key: K) -> NodeId {
    add_child(t, parent, Side::Right, key)
}

/// Set the height of every node in the subtree at `id`, bottom-up.
pub(crate) fn fix_heights<K>(t: &mut FingerTree<K>, id: Option<NodeId>) {
    let id = match id {
        Some(v) => v,
        None => return,
    };

    let (left, right) = (t.node(id).left(), t.node(id).right());
    fix_heights(t, left);
    fix_heights(t, right);

    let height = t.height_of(left).max(t.height_of(right)) + 1;
    t.node_mut(id).set_height(height);
}

/// Render the tree as a Graphviz digraph, labelling each node with its key,
/// frequency and height.
pub(crate) fn print_dot<K>(t: &FingerTree<K>) -> String
where
    K: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(
        buf,
        r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
    )
    .unwrap();
    if let Some(root) = t.root_id() {
        recurse(t, root, &mut buf);
    }
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<K, W>(t: &FingerTree<K>, id: NodeId, buf: &mut W)
where
    W: std::fmt::Write,
    K: Display,
{
    let n = t.node(id);
    writeln!(
        buf,
        r#""{}" [label="{} | {{ n={} | h={} }}"];"#,
        n.key(),
        n.key(),
        n.frequency(),
        n.height(),
    )
    .unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(
                    buf,
                    "\"{}\" -> \"{}\" [color = \"orange1\";];",
                    n.key(),
                    t.node(v).key()
                )
                .unwrap();
                recurse(t, v, buf);
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.key()).unwrap();
                writeln!(buf, "\"{}\" -> \"null_{}\" [style=invis];", n.key(), n.key()).unwrap();
            }
        };
    }
}

mod tests {
    use super::*;

    #[test]
    fn test_print_dot() {
        let t = [1, 2, 2].into_iter().collect::<FingerTree<_>>();

        let got = print_dot(&t);

        assert!(got.starts_with("digraph {\n"));
        assert!(got.ends_with("}\n"));
        assert!(got.contains(r#""1" [label="1 | { n=1 | h=2 }"];"#));
        assert!(got.contains(r#""2" [label="2 | { n=2 | h=1 }"];"#));
        assert!(got.contains(r#""1" -> "2" [color = "orange1";];"#));
        assert!(got.contains(r#""null_1" [shape=point,style=invis];"#));
    }

    proptest! {
        #[test]
        fn prop_near_sorted_shape(keys in near_sorted_keys(50)) {
            // Every key is displaced by at most one position.
            for (i, &k) in keys.iter().enumerate() {
                assert!((k - i as i32).abs() <= 1);
            }

            let mut sorted = keys.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..keys.len() as i32).collect::<Vec<_>>());
        }
    }
}
