#[path = "../tests/common/mod.rs"]
mod common;

use common::{build_graph, gnr_edges, gnr_graph};
use criterion::{black_box, criterion_group, criterion_main, Benchmark, Criterion};
use label_graph_similarity::compute_similarity;
use petgraph::{Directed, Undirected};

const P: f64 = 0.3;

fn bench_gnr(c: &mut Criterion, n: usize) {
    let g1 = gnr_graph::<Directed>(n, P, 65535);
    let g2 = gnr_graph::<Directed>(n, P, 1);

    c.bench_function(&format!("compute_similarity/gnr_{}", n), move |b| {
        b.iter(|| {
            black_box(compute_similarity(&g1, &g2, None).unwrap());
        })
    });
}

fn bench_gnr_100(c: &mut Criterion) {
    bench_gnr(c, 100);
}

fn bench_gnr_300(c: &mut Criterion) {
    bench_gnr(c, 300);
}

fn bench_undirected_projection_1000(c: &mut Criterion) {
    let edges = gnr_edges(1000, P, 65535);
    let directed = build_graph::<Directed>(1000, &edges);
    let undirected = build_graph::<Undirected>(1000, &edges);

    c.bench(
        "compute_similarity",
        Benchmark::new("undirected_projection_1000", move |b| {
            b.iter(|| {
                let s = compute_similarity(&directed, &undirected, None).unwrap();
                assert!(s < 0.0);
            });
        })
        .sample_size(10),
    );
}

criterion_group!(
    benches,
    bench_gnr_100,
    bench_gnr_300,
    bench_undirected_projection_1000
);
criterion_main!(benches);
