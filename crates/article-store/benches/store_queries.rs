//! Store Query Benchmark
//!
//! Measures linear keyword search and page slicing at various collection sizes.

use article_store::ArticleStore;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;

/// Sample topics for generating realistic articles
const TOPICS: &[&str] = &[
    "distributed computing systems",
    "database optimization techniques",
    "network infrastructure",
    "compiler optimization",
    "programming language design",
    "testing methodologies",
];

/// Fills a store with `size` generated articles
fn setup_store(size: usize) -> ArticleStore {
    let mut rng = rand::thread_rng();
    let mut store = ArticleStore::new();

    for i in 0..size {
        let topic = TOPICS[rng.gen_range(0..TOPICS.len())];
        store.create(
            format!("Article {} on {}", i, topic),
            format!("A longer discussion of {} and its trade-offs.", topic),
        );
    }

    store
}

/// Benchmarks search latency at various store sizes
fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1000, 10000] {
        let store = setup_store(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("articles", size), &size, |b, _| {
            b.iter(|| black_box(store.search("Compiler")))
        });
    }

    group.finish();
}

/// Benchmarks page slicing at the front and back of the collection
fn list_page_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_page");
    let store = setup_store(10000);

    group.bench_function("first_page", |b| {
        b.iter(|| black_box(store.list_page(1, 50).unwrap()))
    });
    group.bench_function("last_page", |b| {
        b.iter(|| black_box(store.list_page(200, 50).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, search_benchmark, list_page_benchmark);
criterion_main!(benches);
