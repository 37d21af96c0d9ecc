//! Shared fixtures for the cross-crate integration tests.

use lp_core::errors::LinkError;
use lp_core::serde_io::from_yaml_str;
use lp_core::NodeId;
use lp_graph::AdjacencyGraph;
use lp_score::ScoreParams;
use lp_sparse::SparsifyConfig;
use serde::Deserialize;

/// Scoring parameters paired with the sparsifier applied beforehand.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Parameters forwarded to every scorer.
    #[serde(default)]
    pub score: ScoreParams,
    /// Reduction applied before scoring.
    pub sparsify: SparsifyConfig,
}

impl PipelineConfig {
    /// Parses and validates a pipeline description.
    pub fn from_yaml(data: &str) -> Result<Self, LinkError> {
        let config: Self = from_yaml_str(data)?;
        config.score.validate()?;
        Ok(config)
    }
}

/// Shorthand for building node identifiers in tests.
pub fn n(raw: u64) -> NodeId {
    NodeId::from_raw(raw)
}

/// Builds a graph from raw `(source, target)` pairs.
pub fn graph_of(edges: &[(u64, u64)]) -> AdjacencyGraph {
    AdjacencyGraph::from_edges(edges.iter().map(|&(a, b)| (n(a), n(b))))
}

/// Directed triangle with one reciprocal edge: `1 -> {2, 3}`, `2 -> 3`, `3 -> {1, 2}`.
pub fn triangle() -> AdjacencyGraph {
    graph_of(&[(1, 2), (1, 3), (2, 3), (3, 1), (3, 2)])
}

/// The fan graph used for degree filtering: `1 -> {2, 3, 4}`, `2 -> {1, 3, 4, 5}`, `3 -> {1}`.
pub fn fan() -> AdjacencyGraph {
    graph_of(&[
        (1, 2),
        (1, 3),
        (1, 4),
        (2, 1),
        (2, 3),
        (2, 4),
        (2, 5),
        (3, 1),
    ])
}
