//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI and
//!   for experiments. Breaking changes are allowed and expected.

// Graph and traversal
pub use crate::dfs::{traverse, Dfs, Traversal};
pub use crate::graph::Graph;
// Edge-list I/O
pub use crate::io::{
    load_graph, output_path, read_graph, save_orders, write_orders, GraphInput, LoadError,
    OUTPUT_SUFFIX,
};
// Seeded random graphs
pub use crate::random::{random_graph, GeneratorError, RandomGraphCfg};
