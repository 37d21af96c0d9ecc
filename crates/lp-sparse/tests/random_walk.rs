use lp_core::rng::RngHandle;
use lp_core::NodeId;
use lp_graph::{canonical_hash, gen_random_digraph, AdjacencyGraph};
use lp_sparse::{RandomWalk, RandomWalkConfig, Sparsifier};
use proptest::prelude::*;

fn n(raw: u64) -> NodeId {
    NodeId::from_raw(raw)
}

fn walk(node_dropout: f64, neighbor_dropout: f64, seed: u64) -> RandomWalk {
    RandomWalk::new(RandomWalkConfig {
        node_dropout,
        neighbor_dropout,
        seed,
    })
}

#[test]
fn dropped_sources_may_remain_as_targets() {
    let graph = AdjacencyGraph::from_edges([(n(1), n(2)), (n(2), n(1))]);
    let reduced = walk(0.5, 0.0, 9).fit(&graph).unwrap();

    assert_eq!(reduced.source_count(), 1);
    let (source, targets) = reduced.iter().next().unwrap();
    assert_eq!(targets.len(), 1);
    assert!(!reduced.contains_source(targets[0]));
    assert_ne!(source, targets[0]);
}

#[test]
fn full_node_dropout_empties_the_graph() {
    let mut rng = RngHandle::from_seed(4);
    let graph = gen_random_digraph(12, 3, &mut rng).unwrap();
    assert!(walk(1.0, 0.2, 1).fit(&graph).unwrap().is_empty());
}

#[test]
fn same_seed_same_result() {
    let mut rng = RngHandle::from_seed(21);
    let graph = gen_random_digraph(50, 5, &mut rng).unwrap();
    let first = walk(0.3, 0.4, 77).sparsify(&graph).unwrap();
    let second = walk(0.3, 0.4, 77).sparsify(&graph).unwrap();
    assert_eq!(canonical_hash(&first), canonical_hash(&second));
}

#[test]
fn caller_rng_drives_the_seed() {
    let mut rng = RngHandle::from_seed(5);
    let graph = gen_random_digraph(40, 4, &mut rng).unwrap();
    let sparsifier = walk(0.25, 0.5, 0);

    let mut left = RngHandle::from_seed(100);
    let mut right = RngHandle::from_seed(100);
    assert_eq!(
        sparsifier.fit_with_rng(&graph, &mut left).unwrap(),
        sparsifier.fit_with_rng(&graph, &mut right).unwrap()
    );
}

#[test]
fn non_finite_rates_are_rejected() {
    let graph = AdjacencyGraph::from_edges([(n(1), n(2))]);
    let err = walk(0.1, f64::NAN, 0).fit(&graph).unwrap_err();
    assert_eq!(err.info().code, "invalid-dropout");
    assert_eq!(err.info().context.get("rate").map(String::as_str), Some("neighbor_dropout"));
}

proptest! {
    #[test]
    fn counts_follow_the_dropout_rates(
        graph_seed in any::<u64>(),
        seed in any::<u64>(),
        nodes in 2usize..40,
        degree in 1usize..8,
        node_dropout in 0.0f64..=1.0,
        neighbor_dropout in 0.0f64..=1.0,
    ) {
        let mut rng = RngHandle::from_seed(graph_seed);
        let graph = gen_random_digraph(nodes, degree, &mut rng).unwrap();
        let before = canonical_hash(&graph);

        let reduced = walk(node_dropout, neighbor_dropout, seed).fit(&graph).unwrap();

        prop_assert_eq!(canonical_hash(&graph), before);
        let dropped = (graph.source_count() as f64 * node_dropout).floor() as usize;
        prop_assert_eq!(reduced.source_count(), graph.source_count() - dropped);

        for (source, kept) in reduced.iter() {
            let original = graph.neighbors(source);
            let expected = ((original.len() as f64 * (1.0 - neighbor_dropout)).floor() as usize).max(1);
            prop_assert_eq!(kept.len(), expected);
            // kept neighbours form an ordered subsequence of the original list
            let mut cursor = original.iter();
            for target in kept {
                prop_assert!(cursor.any(|candidate| candidate == target));
            }
        }
    }
}
