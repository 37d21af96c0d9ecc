use lp_core::errors::{ErrorInfo, LinkError};
use lp_core::rng::RngHandle;
use lp_core::NodeId;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::adjacency::AdjacencyGraph;

/// Generates a random directed graph over `n_nodes` nodes.
///
/// Every node draws an out-degree uniformly from `1..=max_out_degree` and
/// links to that many distinct other nodes. Self-loops are never produced.
pub fn gen_random_digraph(
    n_nodes: usize,
    max_out_degree: usize,
    rng: &mut RngHandle,
) -> Result<AdjacencyGraph, LinkError> {
    if n_nodes < 2 {
        return Err(LinkError::Graph(
            ErrorInfo::new(
                "too-few-nodes",
                "random digraph generator requires at least two nodes",
            )
            .with_context("n_nodes", n_nodes.to_string()),
        ));
    }
    let nodes: Vec<NodeId> = (0..n_nodes as u64).map(NodeId::from_raw).collect();
    let degree_cap = max_out_degree.clamp(1, n_nodes - 1);

    let mut graph = AdjacencyGraph::new();
    for source in &nodes {
        let degree = rng.gen_range(1..=degree_cap);
        for target in sample_targets(&nodes, *source, degree, rng) {
            graph.add_edge(*source, target);
        }
    }
    Ok(graph)
}

/// Generates the directed chain `0 -> 1 -> ... -> len - 1`.
pub fn gen_chain(len: usize) -> AdjacencyGraph {
    let nodes: Vec<NodeId> = (0..len as u64).map(NodeId::from_raw).collect();
    AdjacencyGraph::from_edges(nodes.windows(2).map(|pair| (pair[0], pair[1])))
}

fn sample_targets(
    nodes: &[NodeId],
    source: NodeId,
    count: usize,
    rng: &mut RngHandle,
) -> Vec<NodeId> {
    let mut buffer: Vec<NodeId> = nodes.iter().copied().filter(|id| *id != source).collect();
    buffer.shuffle(rng);
    buffer.truncate(count.min(buffer.len()));
    buffer.sort();
    buffer
}
