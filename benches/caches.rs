use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use splay_memo::lru_cache::LruCache;
use splay_memo::splay_tree::SplayMap;
use splay_memo::workload::{fibonacci, fibonacci_lru, fibonacci_splay, Lookup};
use std::collections::HashMap;

const NUM_OF_OPERATIONS: usize = 1000;
const FIBONACCI_INDEX: u64 = 500;

fn keys() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_splay_insert(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench splay_map insert", move |b| {
        b.iter(|| {
            let mut map = SplayMap::new();
            for key in &keys {
                map.insert(*key, *key);
            }
        })
    });
}

fn bench_splay_find(c: &mut Criterion) {
    let keys = keys();
    let mut map = SplayMap::new();
    for key in &keys {
        map.insert(*key, *key);
    }

    c.bench_function("bench splay_map find", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map.find(key));
            }
        })
    });
}

fn bench_splay_find_and_splay(c: &mut Criterion) {
    let keys = keys();
    let mut map = SplayMap::new();
    for key in &keys {
        map.insert(*key, *key);
    }

    c.bench_function("bench splay_map find_and_splay", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map.find_and_splay(key));
            }
        })
    });
}

fn bench_lru_get(c: &mut Criterion) {
    let keys = keys();
    let mut cache = LruCache::new(NUM_OF_OPERATIONS);
    for key in &keys {
        cache.put(*key, *key);
    }

    c.bench_function("bench lru_cache get", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(cache.get(key));
            }
        })
    });
}

fn bench_hashmap_get(c: &mut Criterion) {
    let keys = keys();
    let mut map = HashMap::new();
    for key in &keys {
        map.insert(*key, *key);
    }

    c.bench_function("bench hashmap get", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_fibonacci(c: &mut Criterion) {
    c.bench_function("bench fibonacci uncached", |b| {
        b.iter(|| black_box(fibonacci(FIBONACCI_INDEX)))
    });
    c.bench_function("bench fibonacci lru_cache cold", |b| {
        b.iter(|| {
            let mut cache = LruCache::new(FIBONACCI_INDEX as usize);
            black_box(fibonacci_lru(FIBONACCI_INDEX, &mut cache))
        })
    });
    c.bench_function("bench fibonacci splay_map cold", |b| {
        b.iter(|| {
            let mut map = SplayMap::new();
            black_box(fibonacci_splay(FIBONACCI_INDEX, &mut map, Lookup::Index))
        })
    });
    c.bench_function("bench fibonacci splay_map adaptive cold", |b| {
        b.iter(|| {
            let mut map = SplayMap::new();
            black_box(fibonacci_splay(FIBONACCI_INDEX, &mut map, Lookup::Splay))
        })
    });
}

criterion_group!(
    benches,
    bench_splay_insert,
    bench_splay_find,
    bench_splay_find_and_splay,
    bench_lru_get,
    bench_hashmap_get,
    bench_fibonacci,
);
criterion_main!(benches);
