use std::hint::black_box;

use bench::{apply_runtime_config_for_size, seed_for};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graph::{VertexId, WeightedGraph};
use sssp::generator::{GraphCase, NON_NEGATIVE_CASES, generate_case};
use sssp::{ShortestPathResult, bellman_ford, dijkstra, dijkstra_lazy};

type Solver = fn(&WeightedGraph<()>, VertexId) -> ShortestPathResult<()>;

const ALGORITHMS: [(&str, Solver); 2] = [
    ("dijkstra", dijkstra::<()>),
    ("dijkstra_lazy", dijkstra_lazy::<()>),
];

const SIZES: [usize; 3] = [2_048, 8_192, 32_768];
// Bellman-Ford is quadratic, keep its inputs small.
const BELLMAN_FORD_SIZES: [usize; 2] = [512, 2_048];

fn bench_dijkstra(c: &mut Criterion) {
    for case in NON_NEGATIVE_CASES {
        let mut group = c.benchmark_group(format!("sssp/{}", case.label()));

        for &size in &SIZES {
            apply_runtime_config_for_size(&mut group, size, 2_048, 8_192);
            let input = generate_case(case, size, seed_for(size, case as u64));

            for (algo_name, solver) in ALGORITHMS {
                group.bench_function(BenchmarkId::new(algo_name, size), |bencher| {
                    bencher.iter(|| black_box(solver(&input.graph, input.source)));
                });
            }
        }

        group.finish();
    }
}

fn bench_bellman_ford(c: &mut Criterion) {
    for case in [GraphCase::SparseRandom, GraphCase::NegativeDag] {
        let mut group = c.benchmark_group(format!("sssp/bellman_ford/{}", case.label()));

        for &size in &BELLMAN_FORD_SIZES {
            apply_runtime_config_for_size(&mut group, size, 512, 2_048);
            let input = generate_case(case, size, seed_for(size, case as u64));
            group.bench_function(BenchmarkId::from_parameter(size), |bencher| {
                bencher.iter(|| black_box(bellman_ford(&input.graph, input.source)));
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_dijkstra, bench_bellman_ford);
criterion_main!(benches);
