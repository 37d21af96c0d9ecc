use lp_core::errors::LinkError;
use lp_core::{NodeId, SAME_NODE};
use lp_graph::AdjacencyGraph;

use crate::legacy;

/// Counts the distinct out-neighbours shared by `node1` and `node2`.
///
/// An identical pair is a degenerate query and yields [`SAME_NODE`] without
/// consulting the graph. Both nodes must otherwise be sources.
pub fn try_common_neighbors(
    graph: &AdjacencyGraph,
    node1: NodeId,
    node2: NodeId,
) -> Result<i64, LinkError> {
    if node1 == node2 {
        tracing::warn!(
            op = "common_neighbors",
            node = node1.as_raw(),
            "the two nodes are the same"
        );
        return Ok(SAME_NODE);
    }
    let first = graph.neighbor_set(node1)?;
    let second = graph.neighbor_set(node2)?;
    Ok(first.intersection(&second).count() as i64)
}

/// Sentinel form of [`try_common_neighbors`].
pub fn common_neighbors(graph: &AdjacencyGraph, node1: NodeId, node2: NodeId) -> i64 {
    legacy("common_neighbors", try_common_neighbors(graph, node1, node2))
}

/// Shared out-neighbours divided by the size of the out-neighbour union.
///
/// Returns `0.0` for an empty union. An identical pair divides the
/// [`SAME_NODE`] count by the union, giving `-2 / |N(node)|`.
pub fn try_jaccard_coefficient(
    graph: &AdjacencyGraph,
    node1: NodeId,
    node2: NodeId,
) -> Result<f64, LinkError> {
    let first = graph.neighbor_set(node1)?;
    let second = graph.neighbor_set(node2)?;
    let union_size = first.union(&second).count();
    if union_size == 0 {
        return Ok(0.0);
    }
    let common = try_common_neighbors(graph, node1, node2)?;
    Ok(common as f64 / union_size as f64)
}

/// Sentinel form of [`try_jaccard_coefficient`].
pub fn jaccard_coefficient(graph: &AdjacencyGraph, node1: NodeId, node2: NodeId) -> f64 {
    legacy(
        "jaccard_coefficient",
        try_jaccard_coefficient(graph, node1, node2),
    )
}

/// Adamic-Adar index over undirected neighbourhoods.
///
/// Gated on the directed common-neighbour count: a count of zero, or a
/// missing node, scores `0.0`. Otherwise every node adjacent to both ends
/// (ignoring direction) contributes `1 / ln(degree)` of its undirected
/// degree. Shared neighbours of degree one or less are skipped since their
/// logarithm is zero or undefined.
pub fn try_adamic_adar(
    graph: &AdjacencyGraph,
    node1: NodeId,
    node2: NodeId,
) -> Result<f64, LinkError> {
    let common = match try_common_neighbors(graph, node1, node2) {
        Ok(count) => count,
        Err(err) if err.is_node_not_found() => return Ok(0.0),
        Err(err) => return Err(err),
    };
    if common == 0 {
        return Ok(0.0);
    }

    let first = graph.undirected_neighbors(node1);
    let second = graph.undirected_neighbors(node2);
    let score = first
        .intersection(&second)
        .map(|shared| graph.undirected_degree(*shared))
        .filter(|degree| *degree > 1)
        .map(|degree| 1.0 / (degree as f64).ln())
        .sum();
    Ok(score)
}

/// Sentinel form of [`try_adamic_adar`].
pub fn adamic_adar(graph: &AdjacencyGraph, node1: NodeId, node2: NodeId) -> f64 {
    legacy("adamic_adar", try_adamic_adar(graph, node1, node2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(raw: u64) -> NodeId {
        NodeId::from_raw(raw)
    }

    fn triangle() -> AdjacencyGraph {
        AdjacencyGraph::from_edges([(n(1), n(2)), (n(1), n(3)), (n(2), n(3))])
    }

    #[test]
    fn duplicate_edges_count_once() {
        let graph = AdjacencyGraph::from_edges([
            (n(1), n(3)),
            (n(1), n(3)),
            (n(2), n(3)),
            (n(2), n(3)),
        ]);
        assert_eq!(try_common_neighbors(&graph, n(1), n(2)), Ok(1));
        assert_eq!(try_jaccard_coefficient(&graph, n(1), n(2)), Ok(1.0));
    }

    #[test]
    fn identical_pair_is_degenerate() {
        let graph = triangle();
        assert_eq!(common_neighbors(&graph, n(1), n(1)), SAME_NODE);
        assert_eq!(common_neighbors(&graph, n(7), n(7)), SAME_NODE);
        // N(1) = {2, 3}
        assert_eq!(jaccard_coefficient(&graph, n(1), n(1)), -1.0);
        // N(2) = {3}
        assert_eq!(jaccard_coefficient(&graph, n(2), n(2)), -2.0);
    }

    #[test]
    fn adamic_adar_skips_low_degree_neighbours() {
        let graph = AdjacencyGraph::from_edges([
            (n(1), n(3)),
            (n(2), n(3)),
            (n(1), n(4)),
        ]);
        let expected = 1.0 / 2f64.ln();
        let score = try_adamic_adar(&graph, n(1), n(2)).unwrap();
        assert!((score - expected).abs() < 1e-12);

        // identical pair: 4 only touches 1, ln(1) = 0
        let score = try_adamic_adar(&graph, n(1), n(1)).unwrap();
        assert!((score - expected).abs() < 1e-12);
    }
}
