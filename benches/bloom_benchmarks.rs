//! Bloom filter benchmarks
//!
//! Implemented with Criterion, which provides statistical analysis and
//! performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use bloomfilter::data_structures::bloom_filter::{fnv_1a, SECONDARY_SEED};
use bloomfilter::{estimate_parameters, BloomFilter};
use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};

/// Benchmark the seeded digest over growing inputs
fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("fnv_1a");

    for size in [4usize, 64, 1024].iter() {
        let input = vec![0xa5u8; *size];
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| fnv_1a(black_box(input), SECONDARY_SEED));
        });
    }

    group.finish();
}

/// Benchmark add and test at different capacities
fn bench_bloom_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom_filter");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for items in [1_000usize, 100_000].iter() {
        let (bits, hashes) = estimate_parameters(*items, 0.01);

        group.throughput(Throughput::Elements(*items as u64));
        group.bench_with_input(BenchmarkId::new("add_int", items), items, |b, &items| {
            b.iter_batched(
                || BloomFilter::new(bits, hashes),
                |filter| {
                    for i in 0..items as i64 {
                        filter.add_int(black_box(i));
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });

        let filter = BloomFilter::new(bits, hashes);
        for i in 0..*items as i64 {
            filter.add_int(i);
        }
        group.bench_with_input(BenchmarkId::new("test_int", items), items, |b, &items| {
            b.iter(|| {
                for i in 0..items as i64 {
                    black_box(filter.test_int(black_box(i)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("to_bytes", items), items, |b, _| {
            b.iter(|| black_box(filter.to_bytes()));
        });
    }

    group.finish();
}

/// Benchmark lookups racing a writer
fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom_filter_contended");
    group.measurement_time(Duration::from_secs(2));

    let (bits, hashes) = estimate_parameters(100_000, 0.01);

    group.bench_function("four_readers_one_writer", |b| {
        b.iter(|| {
            let filter = Arc::new(BloomFilter::new(bits, hashes));
            let mut handles = Vec::with_capacity(5);

            let writer = Arc::clone(&filter);
            handles.push(thread::spawn(move || {
                for i in 0..10_000i64 {
                    writer.add_int(i);
                }
            }));

            for _ in 0..4 {
                let reader = Arc::clone(&filter);
                handles.push(thread::spawn(move || {
                    for i in 0..10_000i64 {
                        black_box(reader.test_int(i));
                    }
                }));
            }

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_hash, bench_bloom_filter, bench_contended
}

criterion_main!(benches);
