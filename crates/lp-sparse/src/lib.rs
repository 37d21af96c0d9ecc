#![deny(missing_docs)]

//! Graph reduction strategies producing smaller, independently owned graphs.
//!
//! Both strategies read their input and write into a fresh
//! [`AdjacencyGraph`]; the source graph is never modified.

/// YAML-configurable sparsifier settings.
pub mod config;
/// Two-pass out-degree filter with closure.
pub mod degree;
/// Seeded node and neighbour dropout.
pub mod random_walk;

use lp_core::errors::LinkError;
use lp_graph::AdjacencyGraph;

pub use config::{
    Comparison, DegreeBasedConfig, DegreeCriterion, RandomWalkConfig, SparsifyConfig,
};
pub use degree::DegreeBased;
pub use random_walk::RandomWalk;

/// Structural reduction of an adjacency graph.
pub trait Sparsifier: Send + Sync {
    /// Builds the reduced graph, leaving `graph` untouched.
    fn sparsify(&self, graph: &AdjacencyGraph) -> Result<AdjacencyGraph, LinkError>;
}
