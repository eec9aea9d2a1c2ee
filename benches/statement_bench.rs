/// Statement assembly, token codec and cache benchmarks
/// Measures the per-request work done before a query reaches the database
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::time::Duration;
use tokio::runtime::Runtime;

use news_service::application::token;
use news_service::entities::{NewsDraft, NewsUpdate};
use news_service::infrastructure::cache::InMemoryCache;
use news_service::infrastructure::persistence::{bulk_insert, bulk_update, news_list_statement, NEWS_TABLE};
use news_service::ports::CacheStore;
use news_service::value_objects::{NewsFilter, Pagination};

fn drafts(n: usize) -> Vec<NewsDraft> {
    (0..n)
        .map(|i| NewsDraft::new(format!("title {}", i), format!("content {}", i), 1).unwrap())
        .collect()
}

fn bulk_statement_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_statements");

    for size in [1usize, 10, 100, 1000].iter() {
        let size = *size;
        group.throughput(Throughput::Elements(size as u64));
        let rows = drafts(size);
        let updates: Vec<NewsUpdate> = rows
            .iter()
            .enumerate()
            .map(|(i, d)| NewsUpdate::new(i as i64 + 1, d.clone()).unwrap())
            .collect();

        group.bench_with_input(BenchmarkId::new("bulk_insert", size), &rows, |b, rows| {
            b.iter(|| bulk_insert(&NEWS_TABLE, black_box(rows)))
        });

        group.bench_with_input(BenchmarkId::new("bulk_update", size), &updates, |b, rows| {
            b.iter(|| bulk_update(&NEWS_TABLE, black_box(rows)))
        });
    }

    group.finish();
}

fn list_statement_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_statement");
    let pagination = Pagination::new(40, 20);
    let filter = NewsFilter {
        status: 2,
        topics: vec![1, 2, 3, 4],
        news_id: 0,
        title: "rates".to_string(),
    };

    group.bench_function("unfiltered", |b| {
        b.iter(|| news_list_statement(black_box(&pagination), None))
    });
    group.bench_function("all_filters", |b| {
        b.iter(|| news_list_statement(black_box(&pagination), Some(black_box(&filter))))
    });

    group.finish();
}

fn token_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("token");
    let filter = NewsFilter {
        status: 1,
        topics: (1..50).collect(),
        news_id: 2,
        title: "inflation outlook".to_string(),
    };
    let encoded = token::encode(&filter).unwrap();

    group.bench_function("encode_filter", |b| {
        b.iter(|| token::encode(black_box(&filter)).unwrap())
    });
    group.bench_function("decode_filter", |b| {
        b.iter(|| token::decode::<NewsFilter>(black_box(&encoded)).unwrap())
    });

    group.finish();
}

fn cache_benchmarks(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("memory_cache");
    let cache = InMemoryCache::new();
    let payload = vec![7u8; 4096];
    let ttl = Duration::from_secs(60);

    rt.block_on(async {
        for i in 0..1000 {
            cache
                .set(&format!("/news?page={}", i), payload.clone(), ttl)
                .await
                .unwrap();
        }
    });

    group.bench_function("get_hit", |b| {
        b.to_async(&rt)
            .iter(|| async { cache.get(black_box("/news?page=500")).await.unwrap() })
    });
    group.bench_function("get_miss", |b| {
        b.to_async(&rt)
            .iter(|| async { cache.get(black_box("/news?page=absent")).await.unwrap() })
    });
    group.bench_function("set", |b| {
        b.to_async(&rt).iter(|| async {
            cache
                .set("/news?page=0", payload.clone(), ttl)
                .await
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bulk_statement_benchmarks,
    list_statement_benchmarks,
    token_benchmarks,
    cache_benchmarks
);
criterion_main!(benches);
