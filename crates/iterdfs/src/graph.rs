//! Adjacency-list digraph keyed by string node labels.

use std::collections::HashMap;

/// Directed graph as `source -> [targets]`.
///
/// Invariants:
/// - Each adjacency list keeps edge insertion order; duplicates are kept.
/// - Only nodes with at least one outgoing edge are keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adj: HashMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(u, v)` pairs, appending in iteration order.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut g = Self::new();
        for (u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    /// Append `u -> v` to the end of `u`'s adjacency list.
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>) {
        self.adj.entry(u.into()).or_default().push(v.into());
    }

    /// Successors of `node` in edge order; empty for sinks and unknown nodes.
    pub fn neighbors(&self, node: &str) -> &[String] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True iff `node` has an adjacency entry.
    pub fn contains_source(&self, node: &str) -> bool {
        self.adj.contains_key(node)
    }

    /// Number of nodes with an adjacency entry.
    pub fn source_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum()
    }
}
