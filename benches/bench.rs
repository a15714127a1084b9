use criterion::{criterion_group, criterion_main, Criterion};
use max_queue::{Queue, Rescan, SlidingMax};
use std::time::Duration;

/// Compare the monotone-deque sliding max against the naive rescan.
fn bench(c: &mut Criterion) {
    let values = (0..1000000).map(|_| rand::random::<u64>()).collect::<Vec<_>>();
    let w = 11;

    let mut g = c.benchmark_group("g");
    g.bench_function("queue", |b| {
        b.iter(|| {
            Queue
                .sliding_max(w, values.iter().copied())
                .map(|e| e.pos)
                .sum::<usize>()
        });
    });
    g.bench_function("rescan", |b| {
        b.iter(|| {
            Rescan
                .sliding_max(w, values.iter().copied())
                .map(|e| e.pos)
                .sum::<usize>()
        });
    });
}

criterion_group!(
    name = group;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_millis(2000))
        .sample_size(10);
    targets = bench
);

criterion_main!(group);
