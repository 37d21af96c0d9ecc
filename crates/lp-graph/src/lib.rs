#![deny(missing_docs)]

//! Directed adjacency-mapping graph store backing the scoring and
//! sparsification engines.
//!
//! A graph is built empty and grows only through [`AdjacencyGraph::add_edge`].
//! Scoring reads it; sparsification copies it. Nothing in the workspace
//! mutates a graph it was handed.

mod adjacency;
mod generators;
mod hash;

pub use adjacency::{AdjacencyGraph, DegreeSummary};
pub use generators::{gen_chain, gen_random_digraph};
pub use hash::canonical_hash;
