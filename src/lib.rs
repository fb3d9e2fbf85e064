//! An AVL tree that begins every insertion search at its maximum key (the
//! "finger"), instrumented to measure the cost of doing so.
//!
//! Sorted, or nearly sorted, input reaches its insertion point in a constant
//! number of steps from the finger, where a search from the root always costs
//! `O(log n)`. [`FingerTree::bulk_load_and_sort()`] sorts a sequence by
//! inserting it key by key, reporting how many nodes the searches entered and
//! how many height changes rebalancing observed.
//!
//! ```
//! use fingeravl::FingerTree;
//!
//! let mut t = FingerTree::new();
//! let report = t.bulk_load_and_sort([1, 2, 3, 4, 5]);
//!
//! assert_eq!(report.sorted, [1, 2, 3, 4, 5]);
//!
//! // One node entered per insertion: every key lands right of the finger.
//! assert_eq!(report.search_visits, 5);
//!
//! // Reversed input climbs from the finger towards the root each time.
//! let report = t.bulk_load_and_sort([5, 4, 3, 2, 1]);
//! assert_eq!(report.sorted, [1, 2, 3, 4, 5]);
//! assert_eq!(report.search_visits, 11);
//! ```
//!
//! Duplicate keys are stored once with a frequency count:
//!
//! ```
//! use fingeravl::FingerTree;
//!
//! let t = [3, 1, 3, 3].into_iter().collect::<FingerTree<_>>();
//!
//! assert_eq!(t.len(), 2);
//! assert_eq!(t.frequency(&3), Some(3));
//! assert_eq!(t.to_sorted_sequence(), [1, 3, 3, 3]);
//! ```

mod error;
mod finger;
mod invariants;
mod iter;
mod node;
mod rebalance;
mod tree;

#[cfg(test)]
mod test_utils;

pub use error::InvariantViolation;
pub use finger::Search;
pub use iter::Iter;
pub use tree::{FingerTree, SortReport};
