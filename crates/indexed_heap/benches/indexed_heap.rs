use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hint::black_box;

use bench::{apply_runtime_config_for_size, default_rng};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use indexed_heap::IndexedHeap;
use rand::Rng;
use rand::seq::SliceRandom;

const SIZES: [usize; 3] = [1_024, 16_384, 131_072];
const KEY_MAX: u64 = 1 << 40;

// (priority, id) pairs keep keys unique even when priorities repeat.
fn generate_keys<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<(u64, usize)> {
    (0..n).map(|id| (rng.random_range(0..KEY_MAX), id)).collect()
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_heap/push_pop");
    let mut rng = default_rng();

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size, 1_024, 16_384);
        let keys = generate_keys(&mut rng, size);

        group.bench_function(BenchmarkId::new("indexed_heap", size), |bencher| {
            bencher.iter(|| {
                let mut heap: IndexedHeap<(u64, usize)> = IndexedHeap::with_capacity(keys.len());
                for &key in &keys {
                    heap.push(key);
                }
                while let Ok(key) = heap.pop() {
                    black_box(key);
                }
            });
        });

        group.bench_function(BenchmarkId::new("std_binary_heap", size), |bencher| {
            bencher.iter(|| {
                let mut heap = BinaryHeap::with_capacity(keys.len());
                for &key in &keys {
                    heap.push(Reverse(key));
                }
                while let Some(key) = heap.pop() {
                    black_box(key);
                }
            });
        });
    }

    group.finish();
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_heap/decrease_key");
    let mut rng = default_rng();

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size, 1_024, 16_384);
        let keys = generate_keys(&mut rng, size);
        let mut order: Vec<usize> = (0..size).collect();
        order.shuffle(&mut rng);

        group.bench_function(BenchmarkId::from_parameter(size), |bencher| {
            bencher.iter_batched(
                || IndexedHeap::<(u64, usize)>::from_keys(keys.iter().copied()),
                |mut heap: IndexedHeap<(u64, usize)>| {
                    for &i in &order {
                        let (priority, id) = keys[i];
                        heap.decrease_key(&(priority, id), (priority / 2, id));
                    }
                    black_box(heap.len())
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_decrease_key);
criterion_main!(benches);
