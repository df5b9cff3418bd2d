use core::hint::black_box;

use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashMap as HashbrownMap;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use robin_hash::HashTable;

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 12),
    (1 << 14),
    (1 << 16),
    (1 << 18),
    (1 << 20),
];

/// Keys drawn from `[0, 2^20)`, so the larger sizes contain duplicates.
fn random_keys(count: usize) -> Vec<u64> {
    let mut rng = SmallRng::from_os_rng();
    (0..count).map(|_| rng.random_range(0..(1u64 << 20))).collect()
}

fn filled_robin(keys: &[u64]) -> HashTable<usize> {
    let mut table = HashTable::with_capacity(keys.len());
    for (value, &key) in keys.iter().enumerate() {
        table.put(key, value);
    }
    table
}

fn filled_hashbrown(keys: &[u64]) -> HashbrownMap<u64, usize> {
    let mut map = HashbrownMap::with_capacity(keys.len());
    for (value, &key) in keys.iter().enumerate() {
        map.insert(key, value);
    }
    map
}

fn bench_hash(c: &mut Criterion) {
    let mut rng = OsRng;
    let keys: Vec<u64> = (0..1024).map(|_| rng.try_next_u64().unwrap()).collect();

    c.bench_function("fib_hash", |b| {
        b.iter(|| {
            for &key in &keys {
                black_box(robin_hash::fib_hash::hash(black_box(key), 54));
            }
        })
    });
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = random_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("robin_hash/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut table = HashTable::new();
                    for (value, key) in keys.into_iter().enumerate() {
                        table.put(key, value);
                    }
                    black_box(table)
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut map = HashbrownMap::new();
                    for (value, key) in keys.into_iter().enumerate() {
                        map.insert(key, value);
                    }
                    black_box(map)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_insert_preallocated(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_preallocated");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = random_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("robin_hash/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| black_box(filled_robin(&keys)),
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| black_box(filled_hashbrown(&keys)),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_lookup_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_hit");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let mut keys = random_keys(size);
        let table = filled_robin(&keys);
        let map = filled_hashbrown(&keys);
        keys.shuffle(&mut SmallRng::from_os_rng());
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("robin_hash/{size}"), |b| {
            b.iter(|| {
                for &key in &keys {
                    black_box(table.get(key));
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in &keys {
                    black_box(map.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_lookup_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_miss");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = random_keys(size);
        let table = filled_robin(&keys);
        let map = filled_hashbrown(&keys);
        let misses: Vec<u64> = keys.iter().map(|key| key + (1 << 20)).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("robin_hash/{size}"), |b| {
            b.iter(|| {
                for &key in &misses {
                    black_box(table.get(key));
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in &misses {
                    black_box(map.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_lookup_zipf(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_zipf");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = random_keys(size);
        let table = filled_robin(&keys);
        let map = filled_hashbrown(&keys);

        let zipf = Zipf::new(size as f64, 1.03).unwrap();
        let mut rng = SmallRng::from_os_rng();
        let probes: Vec<u64> = (0..size)
            .map(|_| keys[rng.sample(zipf) as usize - 1])
            .collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("robin_hash/{size}"), |b| {
            b.iter(|| {
                for &key in &probes {
                    black_box(table.get(key));
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in &probes {
                    black_box(map.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let mut keys = random_keys(size);
        let table = filled_robin(&keys);
        let map = filled_hashbrown(&keys);
        keys.shuffle(&mut SmallRng::from_os_rng());
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("robin_hash/{size}"), |b| {
            b.iter_batched(
                || table.clone(),
                |mut table| {
                    for &key in &keys {
                        black_box(table.delete(key));
                    }
                    black_box(table)
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || map.clone(),
                |mut map| {
                    for key in &keys {
                        black_box(map.remove(key));
                    }
                    black_box(map)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hash,
    bench_insert,
    bench_insert_preallocated,
    bench_lookup_hit,
    bench_lookup_miss,
    bench_lookup_zipf,
    bench_delete,
);

criterion_main!(benches);
