//! Iterative DFS: pre-order, post-order and discovery parents.
//!
//! Purpose
//! - Reproduce the visit and finish order of a recursive DFS that explores
//!   successors in adjacency order, without recursion, so deep graphs cannot
//!   overflow the call stack.
//!
//! Shape
//! - A node is inspected on the stack top twice: the first inspection emits
//!   it to pre-order and pushes its unvisited successors (reversed, so they
//!   come off the stack left to right); the second inspection pops it and
//!   emits it to post-order.
//! - `types.rs` holds the result type, `runner.rs` the search itself.

mod runner;
mod types;

pub use runner::{traverse, Dfs};
pub use types::Traversal;

#[cfg(test)]
mod tests;
