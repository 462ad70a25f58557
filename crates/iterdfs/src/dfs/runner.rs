//! Explicit-stack DFS with a peek-then-pop two-phase visit.

use std::collections::HashSet;

use crate::graph::Graph;

use super::types::Traversal;

/// Traverse `graph` depth-first from `start`.
///
/// `start` need not be a key of `graph`; it is then a sink and the result
/// holds just that node. Never fails: cycles, self-loops and duplicate edges
/// are absorbed by the visited set.
pub fn traverse(graph: &Graph, start: &str) -> Traversal {
    Dfs::new(graph).run(start)
}

/// DFS runner carrying the graph borrow and accumulators of one traversal.
pub struct Dfs<'a> {
    g: &'a Graph,
    stack: Vec<&'a str>,
    visited: HashSet<&'a str>,
    finished: HashSet<&'a str>,
    out: Traversal,
}

impl<'a> Dfs<'a> {
    pub fn new(g: &'a Graph) -> Self {
        Self {
            g,
            stack: Vec::new(),
            visited: HashSet::new(),
            finished: HashSet::new(),
            out: Traversal::default(),
        }
    }

    /// Consume the runner and traverse from `start`.
    pub fn run(mut self, start: &'a str) -> Traversal {
        self.stack.push(start);
        while let Some(&cur) = self.stack.last() {
            if self.visited.insert(cur) {
                self.enter(cur);
            } else {
                self.stack.pop();
                self.leave(cur);
            }
        }
        self.out
    }

    fn enter(&mut self, cur: &'a str) {
        let g = self.g;
        self.out.pre_order.push(cur.to_owned());
        // Reversed so successors come off the stack in adjacency order.
        for next in g.neighbors(cur).iter().rev() {
            let next = next.as_str();
            if self.visited.contains(next) {
                continue;
            }
            // First discoverer wins; a duplicate or later push keeps it.
            self.out
                .parent
                .entry(next.to_owned())
                .or_insert_with(|| cur.to_owned());
            self.stack.push(next);
        }
    }

    fn leave(&mut self, cur: &'a str) {
        // A node pushed more than once surfaces again after it finished.
        if self.finished.insert(cur) {
            self.out.post_order.push(cur.to_owned());
        }
    }
}
