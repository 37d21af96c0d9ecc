use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lp_core::rng::RngHandle;
use lp_core::NodeId;
use lp_graph::gen_random_digraph;
use lp_score::{ScoreKind, ScoreParams};

fn score_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(11);
    let graph = gen_random_digraph(1_000, 6, &mut rng).unwrap();
    let pairs: Vec<(NodeId, NodeId)> = (0..200u64)
        .map(|i| (NodeId::from_raw(i), NodeId::from_raw((i * 7 + 3) % 1_000)))
        .collect();
    let params = ScoreParams {
        alpha: 0.1,
        max_length: 4,
        ..ScoreParams::default()
    };

    for kind in ScoreKind::ALL {
        c.bench_function(kind.name(), |b| {
            b.iter(|| {
                for (a, z) in &pairs {
                    black_box(kind.evaluate(&graph, *a, *z, &params).unwrap());
                }
            });
        });
    }
}

criterion_group!(benches, score_bench);
criterion_main!(benches);
