//! Criterion benchmarks for the subgradient driver.
//!
//! Uses seeded random facility-location instances to measure the dual loop
//! end to end under both step rules.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lagrel::subgrad::{StepSizeRule, SubgradConfig, SubgradRunner};
use lagrel::ufl::UflInstance;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_instance(demands: usize, sites: usize, seed: u64) -> UflInstance {
    let mut rng = StdRng::seed_from_u64(seed);
    let assign_value: Vec<f64> = (0..demands * sites)
        .map(|_| rng.random_range(1.0..10.0))
        .collect();
    let open_cost: Vec<f64> = (0..sites).map(|_| rng.random_range(20.0..100.0)).collect();
    UflInstance::new(demands, sites, assign_value, open_cost).unwrap()
}

fn bench_subgradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("subgradient");

    for &(demands, sites) in &[(50, 5), (200, 21)] {
        let instance = random_instance(demands, sites, 1);

        for (name, rule) in [
            ("geometric", StepSizeRule::geometric()),
            ("adaptive", StepSizeRule::adaptive()),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, format!("{demands}x{sites}")),
                &instance,
                |b, instance| {
                    let config = SubgradConfig::default()
                        .with_step_rule(rule)
                        .with_trace(false)
                        .with_seed(42);
                    b.iter(|| SubgradRunner::run(black_box(instance), &config).unwrap());
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_subgradient);
criterion_main!(benches);
