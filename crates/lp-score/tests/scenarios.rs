use lp_core::NodeId;
use lp_graph::AdjacencyGraph;
use lp_score::{
    adamic_adar, common_neighbors, jaccard_coefficient, katz_score, preferential_attachment,
    shortest_path, try_katz_score, try_preferential_attachment,
};

fn n(raw: u64) -> NodeId {
    NodeId::from_raw(raw)
}

fn graph(edges: &[(u64, u64)]) -> AdjacencyGraph {
    AdjacencyGraph::from_edges(edges.iter().map(|(a, b)| (n(*a), n(*b))))
}

#[test]
fn triangle_neighbourhood_scores() {
    let graph = graph(&[(1, 2), (1, 3), (2, 3)]);
    assert_eq!(common_neighbors(&graph, n(1), n(2)), 1);
    assert_eq!(jaccard_coefficient(&graph, n(1), n(2)), 0.5);

    // shared neighbour 3 touches 1 and 2
    let expected = 1.0 / 2f64.ln();
    assert!((adamic_adar(&graph, n(1), n(2)) - expected).abs() < 1e-12);
}

#[test]
fn two_hop_shortest_path() {
    let graph = graph(&[(1, 2), (1, 3), (2, 4)]);
    assert_eq!(shortest_path(&graph, n(1), n(4), 6), 2);
    assert_eq!(shortest_path(&graph, n(1), n(3), 6), 1);
    assert_eq!(shortest_path(&graph, n(4), n(1), 6), -1);
    assert_eq!(shortest_path(&graph, n(1), n(4), 1), -1);
}

#[test]
fn preferential_attachment_multiplies_out_degrees() {
    let graph = graph(&[(1, 2), (1, 4), (4, 3), (4, 2)]);
    let expected = graph.neighbors_size(n(1)) * graph.neighbors_size(n(4));
    assert_eq!(preferential_attachment(&graph, n(1), n(4)), expected);
    assert_eq!(preferential_attachment(&graph, n(1), n(4)), 4);
    assert_eq!(try_preferential_attachment(&graph, n(1), n(4)), Ok(4));
}

#[test]
fn katz_compounds_per_matching_path() {
    let graph = graph(&[(1, 2), (1, 4), (4, 3), (4, 2)]);

    // length 1: [1,4] matches -> (0 + 0.8) * 2
    let one_hop = katz_score(&graph, n(1), n(4), 0.8, 1);
    assert!((one_hop - 1.6).abs() < 1e-12);

    // length 2: [1,4,3] matches -> (1.6 + 0.64) * 2, nothing at length 3
    let full = katz_score(&graph, n(1), n(4), 0.8, 100);
    assert!((full - 4.48).abs() < 1e-12);

    assert_eq!(katz_score(&graph, n(1), n(4), 0.8, 0), 0.0);
}

#[test]
fn katz_without_matches_is_zero() {
    let graph = graph(&[(1, 2), (3, 4)]);
    assert_eq!(try_katz_score(&graph, n(1), n(4), 0.5, 10), Ok(0.0));
}
