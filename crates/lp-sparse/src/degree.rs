use lp_core::errors::LinkError;
use lp_graph::AdjacencyGraph;

use crate::config::{Comparison, DegreeBasedConfig, DegreeCriterion};
use crate::Sparsifier;

/// Keeps sources whose out-degree satisfies a criterion, then closes the result.
///
/// The first pass selects sources by out-degree and keeps their whole
/// neighbour lists. The second pass drops every edge whose target did not
/// itself survive the first pass, so no edge of the result points outside
/// the selected set.
#[derive(Debug, Clone)]
pub struct DegreeBased {
    config: DegreeBasedConfig,
}

impl DegreeBased {
    /// Creates a filter from a full configuration.
    pub fn new(config: DegreeBasedConfig) -> Self {
        Self { config }
    }

    /// Keeps sources with out-degree strictly greater than `threshold`.
    pub fn above(threshold: usize) -> Self {
        Self::new(DegreeBasedConfig {
            criterion: DegreeCriterion::Threshold(threshold),
            comparison: Comparison::Gt,
        })
    }

    /// Keeps sources whose out-degree is one of `degrees`.
    pub fn one_of(degrees: impl IntoIterator<Item = usize>) -> Self {
        Self::new(DegreeBasedConfig {
            criterion: DegreeCriterion::OneOf(degrees.into_iter().collect()),
            comparison: Comparison::default(),
        })
    }

    /// Replaces the comparison used with a threshold criterion.
    pub fn with_comparison(mut self, comparison: Comparison) -> Self {
        self.config.comparison = comparison;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &DegreeBasedConfig {
        &self.config
    }

    /// First pass: sources passing the criterion with their full neighbour lists.
    pub fn select_sources(&self, graph: &AdjacencyGraph) -> AdjacencyGraph {
        let mut selected = AdjacencyGraph::new();
        for (source, neighbours) in graph.iter() {
            if self.config.accepts(neighbours.len()) {
                for target in neighbours {
                    selected.add_edge(source, *target);
                }
            }
        }
        selected
    }

    /// Both passes: selected sources restricted to edges between selected sources.
    pub fn fit(&self, graph: &AdjacencyGraph) -> AdjacencyGraph {
        let selected = self.select_sources(graph);
        let mut closed = AdjacencyGraph::new();
        for (source, neighbours) in selected.iter() {
            for target in neighbours {
                if selected.contains_source(*target) {
                    closed.add_edge(source, *target);
                }
            }
        }
        tracing::debug!(
            op = "degree_based",
            sources_before = graph.source_count(),
            sources_selected = selected.source_count(),
            sources_after = closed.source_count(),
            edges_before = graph.edge_count(),
            edges_after = closed.edge_count(),
            "sparsified graph"
        );
        closed
    }
}

impl Sparsifier for DegreeBased {
    fn sparsify(&self, graph: &AdjacencyGraph) -> Result<AdjacencyGraph, LinkError> {
        Ok(self.fit(graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_core::NodeId;

    fn n(raw: u64) -> NodeId {
        NodeId::from_raw(raw)
    }

    #[test]
    fn first_pass_keeps_dangling_targets() {
        let graph = AdjacencyGraph::from_edges([
            (n(1), n(2)),
            (n(1), n(9)),
            (n(2), n(1)),
            (n(3), n(1)),
        ]);
        let filter = DegreeBased::above(1);
        let selected = filter.select_sources(&graph);
        assert_eq!(selected.neighbors(n(1)), &[n(2), n(9)]);
        assert!(!selected.contains_source(n(2)));

        // 2 was not selected, so 1 -> 2 is dropped and 1 has nothing left
        assert!(filter.fit(&graph).is_empty());
    }
}
