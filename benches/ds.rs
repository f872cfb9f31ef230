use algoviz::ds::{PriorityQueue, RecencyCache};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn bench_priority_queue_push_pop(c: &mut Criterion) {
    c.bench_function("priority_queue_push_pop", |b| {
        b.iter_batched(
            || {
                let mut rng = SmallRng::seed_from_u64(1);
                (0..1024usize)
                    .map(|i| (i, rng.random_range(0..10_000u64)))
                    .collect::<Vec<_>>()
            },
            |entries| {
                let mut queue = PriorityQueue::with_capacity(entries.len());
                for (item, priority) in entries {
                    queue.push(std::hint::black_box(item), priority);
                }
                while let Ok(top) = queue.pop() {
                    std::hint::black_box(top);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_priority_queue_lazy_deletion(c: &mut Criterion) {
    // repeated pushes for the same item, as shortest-path relaxation does
    c.bench_function("priority_queue_lazy_deletion", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new();
            for round in (0..16u64).rev() {
                for item in 0..64usize {
                    queue.push(item, round * 64 + item as u64);
                }
            }
            while let Ok(top) = queue.pop() {
                std::hint::black_box(top);
            }
        })
    });
}

fn bench_recency_cache_hotset(c: &mut Criterion) {
    c.bench_function("recency_cache_hotset", |b| {
        b.iter_batched(
            || {
                let mut cache = RecencyCache::new(1024);
                for i in 0..1024usize {
                    cache.access(i);
                }
                cache
            },
            |mut cache| {
                for i in 0..4096usize {
                    std::hint::black_box(cache.access(std::hint::black_box(i % 1024)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_recency_cache_eviction_churn(c: &mut Criterion) {
    c.bench_function("recency_cache_eviction_churn", |b| {
        b.iter_batched(
            || RecencyCache::new(8),
            |mut cache| {
                for i in 0..4096usize {
                    std::hint::black_box(cache.access(std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_priority_queue_push_pop,
    bench_priority_queue_lazy_deletion,
    bench_recency_cache_hotset,
    bench_recency_cache_eviction_churn
);
criterion_main!(benches);
