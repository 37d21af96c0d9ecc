use lp_core::errors::LinkError;
use lp_core::NodeId;
use lp_graph::AdjacencyGraph;

/// Product of the out-degrees of both nodes.
pub fn try_preferential_attachment(
    graph: &AdjacencyGraph,
    node1: NodeId,
    node2: NodeId,
) -> Result<usize, LinkError> {
    Ok(graph.out_degree(node1)? * graph.out_degree(node2)?)
}

/// Sentinel form of preferential attachment.
///
/// Each degree lookup independently degrades to `-1`. When both fail the sum
/// of the two sentinels (`-2`) is returned; when only one fails the product
/// is negative. Callers must treat any negative result as a failed lookup.
pub fn preferential_attachment(graph: &AdjacencyGraph, node1: NodeId, node2: NodeId) -> i64 {
    let first = graph.neighbors_size(node1);
    let second = graph.neighbors_size(node2);
    if first < 0 && second < 0 {
        return first + second;
    }
    first * second
}
