//! Result of a single traversal.

use std::collections::HashMap;

/// Orders and parent map produced by one DFS from one start node.
///
/// Invariants:
/// - `post_order` is a permutation of `pre_order`; both list exactly the
///   nodes reachable from the start node.
/// - `parent` has one entry per discovery edge; the start node has none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Traversal {
    pub pre_order: Vec<String>,
    pub post_order: Vec<String>,
    pub parent: HashMap<String, String>, // discovered -> discoverer
}

impl Traversal {
    /// Node that first discovered `node`, `None` for the start node and for
    /// nodes never reached.
    pub fn parent_of(&self, node: &str) -> Option<&str> {
        self.parent.get(node).map(String::as_str)
    }

    /// Number of reachable nodes.
    pub fn len(&self) -> usize {
        self.pre_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pre_order.is_empty()
    }

    /// True iff `node` was reached. Linear in the number of reached nodes.
    pub fn contains(&self, node: &str) -> bool {
        self.pre_order.iter().any(|n| n == node)
    }
}
