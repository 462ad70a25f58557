//! Seeded random digraphs for benches and stress tests.
//!
//! Model
//! - Labels `0..nodes`; each of `edges` edges picks source and target
//!   uniformly (self-loops optionally rejected and redrawn). Duplicate edges
//!   are allowed, the traversal must cope with them anyway.
//! - The start node is always `"0"`.
//! - Determinism: one `StdRng` seeded from `seed`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::graph::Graph;
use crate::io::GraphInput;

/// Error type for the generator.
#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Random graph configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphCfg {
    pub nodes: usize,
    pub edges: usize,
    pub allow_self_loops: bool,
}

impl Default for RandomGraphCfg {
    fn default() -> Self {
        Self {
            nodes: 100,
            edges: 300,
            allow_self_loops: true,
        }
    }
}

impl RandomGraphCfg {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.nodes == 0 {
            return Err(GeneratorError::invalid("need at least one node"));
        }
        if !self.allow_self_loops && self.nodes == 1 && self.edges > 0 {
            return Err(GeneratorError::invalid(
                "a single node without self-loops admits no edges",
            ));
        }
        Ok(())
    }
}

/// Draw a graph; the same `(cfg, seed)` always yields the same graph.
pub fn random_graph(cfg: RandomGraphCfg, seed: u64) -> Result<GraphInput, GeneratorError> {
    cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();
    for _ in 0..cfg.edges {
        let u = rng.gen_range(0..cfg.nodes);
        let mut v = rng.gen_range(0..cfg.nodes);
        while !cfg.allow_self_loops && v == u {
            v = rng.gen_range(0..cfg.nodes);
        }
        graph.add_edge(u.to_string(), v.to_string());
    }
    Ok(GraphInput {
        node_count: cfg.nodes,
        graph,
        start: "0".to_owned(),
    })
}
