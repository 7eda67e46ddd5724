use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rangeq_engine::{Backend, Engine};
use rangeq_logging::Logger;
use rangeq_parse::{Operation, Workload};

/// Seeded mixed workload: alternating wide updates and queries.
fn mixed_workload(n: usize, q: usize, seed: u64) -> Workload {
    let mut rng = StdRng::seed_from_u64(seed);

    let operations = (0..q)
        .map(|i| {
            if i % 2 == 0 {
                let x = rng.random_range(1..=n);
                let y = rng.random_range(1..=n);
                Operation::RangeAdd {
                    a: x.min(y),
                    b: x.max(y),
                    u: rng.random_range(-500..500),
                }
            } else {
                Operation::PointQuery {
                    k: rng.random_range(1..=n),
                }
            }
        })
        .collect();

    Workload {
        base: (0..n as i64).collect(),
        operations,
    }
}

fn bench_backends(c: &mut Criterion) {
    let logger = Logger::quiet();
    let mut group = c.benchmark_group("range_update_point_query");

    for &n in &[1_000usize, 20_000] {
        let workload = mixed_workload(n, 20_000, 0x5eed);
        for backend in Backend::ALL {
            group.bench_with_input(BenchmarkId::new(backend.to_string(), n), &workload, |b, w| {
                let engine = Engine::new(backend, &logger);
                b.iter(|| engine.run(black_box(w)).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
