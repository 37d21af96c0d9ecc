use std::collections::{BTreeSet, VecDeque};

use lp_core::{NodeId, NODE_NOT_FOUND};
use lp_graph::AdjacencyGraph;

/// Default hop bound for [`shortest_path`].
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Breadth-first distance from `source` to `target`, bounded by `max_depth` hops.
///
/// Returns `Some(0)` for an identical pair and `Some(1)` for a direct edge
/// whatever the bound. Otherwise `None` when either node is absent from the
/// graph or `target` cannot be reached within `max_depth` edges. Nodes
/// without outgoing edges are leaves of the search.
pub fn try_shortest_path(
    graph: &AdjacencyGraph,
    source: NodeId,
    target: NodeId,
    max_depth: usize,
) -> Option<usize> {
    if source == target {
        return Some(0);
    }
    let nodes = graph.nodes();
    if !nodes.contains(&source) || !nodes.contains(&target) {
        return None;
    }
    if graph
        .out_neighbors(source)
        .is_some_and(|neighbours| neighbours.contains(&target))
    {
        return Some(1);
    }

    let mut visited = BTreeSet::from([source]);
    let mut frontier = VecDeque::from([(source, 0usize)]);
    while let Some((node, depth)) = frontier.pop_front() {
        if depth >= max_depth {
            tracing::debug!(
                op = "shortest_path",
                node = node.as_raw(),
                depth,
                "depth bound reached"
            );
            continue;
        }
        let Some(neighbours) = graph.out_neighbors(node) else {
            continue;
        };
        for &neighbour in neighbours {
            if neighbour == target {
                return Some(depth + 1);
            }
            if visited.insert(neighbour) {
                frontier.push_back((neighbour, depth + 1));
            }
        }
    }
    None
}

/// Sentinel form of [`try_shortest_path`]: unreachable or unknown pairs yield `-1`.
pub fn shortest_path(
    graph: &AdjacencyGraph,
    source: NodeId,
    target: NodeId,
    max_depth: usize,
) -> i64 {
    try_shortest_path(graph, source, target, max_depth)
        .map(|distance| distance as i64)
        .unwrap_or(NODE_NOT_FOUND)
}
