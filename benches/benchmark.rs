// Path query benchmarks: cold searches vs cached searches
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use tinygraph::Graph;

fn generate_random_graph(vertices: u32, edges: usize, directed: bool) -> Graph<u32> {
    let mut rng = rand::rng();
    let mut graph = if directed {
        Graph::directed("bench")
    } else {
        Graph::undirected("bench")
    };

    for v in 0..vertices {
        graph.add_vertex(v).unwrap();
    }

    let mut inserted = 0;
    while inserted < edges {
        let from = rng.random_range(0..vertices);
        let to = rng.random_range(0..vertices);
        if graph.add_edge(&from, &to).is_ok() {
            inserted += 1;
        }
    }
    graph
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100u32, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("tinygraph", size), size, |b, &size| {
            b.iter(|| {
                let graph = generate_random_graph(size, size as usize * 4, true);
                black_box(graph);
            });
        });
    }

    group.finish();
}

fn benchmark_cold_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_cold");

    for size in [100u32, 1000, 5000].iter() {
        let graph = generate_random_graph(*size, *size as usize * 4, true);
        group.bench_with_input(BenchmarkId::new("tinygraph", size), size, |b, &size| {
            b.iter_batched(
                || graph.clone(),
                |mut graph| {
                    let path = graph.get_path(&0, &(size - 1)).unwrap();
                    black_box(path);
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_cached_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_cached");

    let mut graph = generate_random_graph(5000, 20000, false);
    graph.get_path(&0, &1).unwrap();

    group.bench_function("tinygraph_cached", |b| {
        let mut target = 0u32;
        b.iter(|| {
            target = (target + 1) % 5000;
            let path = graph.get_path(&0, black_box(&target)).unwrap();
            black_box(path);
        });
    });

    group.bench_function("tinygraph_cycle", |b| {
        b.iter(|| {
            let cycle = graph.get_path(&0, &0).unwrap();
            black_box(cycle);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_cold_path, benchmark_cached_path);
criterion_main!(benches);
