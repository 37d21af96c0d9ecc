use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lp_core::rng::RngHandle;
use lp_graph::gen_random_digraph;
use lp_sparse::{DegreeBased, RandomWalk, RandomWalkConfig, Sparsifier};

fn sparsify_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(29);
    let graph = gen_random_digraph(5_000, 8, &mut rng).unwrap();

    let degree = DegreeBased::above(4);
    c.bench_function("degree_based", |b| {
        b.iter(|| black_box(degree.sparsify(&graph).unwrap()));
    });

    let walk = RandomWalk::new(RandomWalkConfig {
        node_dropout: 0.2,
        neighbor_dropout: 0.3,
        seed: 5,
    });
    c.bench_function("random_walk", |b| {
        b.iter(|| black_box(walk.sparsify(&graph).unwrap()));
    });
}

criterion_group!(benches, sparsify_bench);
criterion_main!(benches);
