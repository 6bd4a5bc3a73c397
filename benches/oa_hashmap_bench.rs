use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use oa_hashmap::OaHashMap;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("oa_hashmap_insert_10k", |b| {
        b.iter_batched(
            || OaHashMap::<u64>::with_capacity(16),
            |mut m| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    m.insert(&key(x), i as u64).unwrap();
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("oa_hashmap_get_hit", |b| {
        let mut m = OaHashMap::with_capacity(16);
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.insert(k, i as u64).unwrap();
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("oa_hashmap_get_miss", |b| {
        let mut m = OaHashMap::with_capacity(16);
        for (i, x) in lcg(11).take(10_000).enumerate() {
            m.insert(&key(x), i as u64).unwrap();
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in map
            let k = key(miss.next().unwrap());
            black_box(m.get(&k));
        })
    });
}

// Delete/reinsert churn over a warm table exercises the tombstone
// reclamation path rather than fresh-slot inserts.
fn bench_churn_delete_insert(c: &mut Criterion) {
    c.bench_function("oa_hashmap_churn_delete_insert", |b| {
        let mut m = OaHashMap::with_capacity(16);
        let keys: Vec<_> = lcg(23).take(10_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.insert(k, i as u64).unwrap();
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            let v = m.remove(k).unwrap();
            m.insert(k, v).unwrap();
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_churn_delete_insert
}
criterion_main!(benches);
