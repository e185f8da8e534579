//! Prefix Trie Benchmarks
//!
//! Criterion benchmarks for the trie operations.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode,
    Throughput,
};
use prefix_trie_lib::Trie;
use std::time::Duration;

/// Deterministic words with heavily shared prefixes, e.g. `w0017x`.
fn generate_words(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("w{:04}x{}", i % 5000, i / 5000)).collect()
}

/// Benchmark trie inserts, lookups, enumeration and deletes.
fn bench_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let words = generate_words(*size);
        let trie: Trie = words.iter().collect();
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("insert", size), &words, |b, words| {
            b.iter(|| {
                let mut trie = Trie::new();
                for word in words {
                    trie.insert(black_box(word));
                }
                trie
            });
        });

        group.bench_with_input(BenchmarkId::new("contains", size), &words, |b, words| {
            b.iter(|| words.iter().filter(|w| trie.contains(black_box(w))).count());
        });

        group.bench_with_input(BenchmarkId::new("words_with_prefix", size), &trie, |b, trie| {
            b.iter(|| trie.words_with_prefix(black_box("w00")).len());
        });

        group.bench_with_input(BenchmarkId::new("delete", size), &words, |b, words| {
            b.iter_batched(
                || trie.clone(),
                |mut trie| {
                    for word in words {
                        trie.delete(black_box(word));
                    }
                    trie
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_trie);
criterion_main!(benches);
