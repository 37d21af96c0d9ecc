use std::fmt;

use lp_core::errors::LinkError;
use lp_core::NodeId;
use lp_graph::AdjacencyGraph;
use serde::{Deserialize, Serialize};

use crate::config::ScoreParams;
use crate::{
    adamic_adar, common_neighbors, jaccard_coefficient, katz_score, preferential_attachment,
    shortest_path,
};

/// Scalar produced by a scorer: integer counts or real-valued scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScoreValue {
    /// Counts, distances and sentinels.
    Int(i64),
    /// Ratios and weighted sums.
    Float(f64),
}

impl ScoreValue {
    /// Widens the value to `f64`.
    pub fn as_f64(&self) -> f64 {
        match self {
            ScoreValue::Int(value) => *value as f64,
            ScoreValue::Float(value) => *value,
        }
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreValue::Int(value) => write!(f, "{value}"),
            ScoreValue::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Names every pairwise scorer so callers can select them from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    /// Shared out-neighbour count.
    CommonNeighbors,
    /// Shared over union of out-neighbours.
    JaccardCoefficient,
    /// Inverse-log-degree weighted shared neighbours.
    AdamicAdar,
    /// Depth-bounded hop distance.
    ShortestPath,
    /// Attenuated path count.
    KatzScore,
    /// Product of out-degrees.
    PreferentialAttachment,
}

impl ScoreKind {
    /// Every scorer in declaration order.
    pub const ALL: [ScoreKind; 6] = [
        ScoreKind::CommonNeighbors,
        ScoreKind::JaccardCoefficient,
        ScoreKind::AdamicAdar,
        ScoreKind::ShortestPath,
        ScoreKind::KatzScore,
        ScoreKind::PreferentialAttachment,
    ];

    /// Stable snake_case name, suitable as a column label.
    pub fn name(&self) -> &'static str {
        match self {
            ScoreKind::CommonNeighbors => "common_neighbors",
            ScoreKind::JaccardCoefficient => "jaccard_coefficient",
            ScoreKind::AdamicAdar => "adamic_adar",
            ScoreKind::ShortestPath => "shortest_path",
            ScoreKind::KatzScore => "katz_score",
            ScoreKind::PreferentialAttachment => "preferential_attachment",
        }
    }

    /// Scores one node pair, degrading missing nodes to their sentinel.
    ///
    /// Only invalid parameters produce an error.
    pub fn evaluate(
        &self,
        graph: &AdjacencyGraph,
        node1: NodeId,
        node2: NodeId,
        params: &ScoreParams,
    ) -> Result<ScoreValue, LinkError> {
        params.validate()?;
        let value = match self {
            ScoreKind::CommonNeighbors => ScoreValue::Int(common_neighbors(graph, node1, node2)),
            ScoreKind::JaccardCoefficient => {
                ScoreValue::Float(jaccard_coefficient(graph, node1, node2))
            }
            ScoreKind::AdamicAdar => ScoreValue::Float(adamic_adar(graph, node1, node2)),
            ScoreKind::ShortestPath => {
                ScoreValue::Int(shortest_path(graph, node1, node2, params.max_depth))
            }
            ScoreKind::KatzScore => ScoreValue::Float(katz_score(
                graph,
                node1,
                node2,
                params.alpha,
                params.max_length,
            )),
            ScoreKind::PreferentialAttachment => {
                ScoreValue::Int(preferential_attachment(graph, node1, node2))
            }
        };
        Ok(value)
    }
}
