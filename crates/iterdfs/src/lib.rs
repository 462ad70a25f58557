//! Iterative depth-first traversal over edge-list graphs.
//!
//! The engine (`dfs`) walks a directed graph with an explicit stack and
//! reproduces the pre-order, post-order and discovery parents of a recursive
//! DFS without growing the call stack. `io` reads the edge-list format and
//! writes the two orders back out; `random` draws seeded graphs for benches.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - `api` is the curated surface for the CLI and experiments.

pub mod api;
pub mod dfs;
pub mod graph;
pub mod io;
pub mod random;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use dfs::{traverse, Traversal};
pub use graph::Graph;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dfs::{traverse, Dfs, Traversal};
    pub use crate::graph::Graph;
    pub use crate::io::{load_graph, output_path, read_graph, save_orders, write_orders, GraphInput};
}
