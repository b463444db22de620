use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sweeper_core::{GameConfig, Level, MineFieldGenerator, RandomMineFieldGenerator, SafeZone};

fn tiers() -> Vec<(&'static str, GameConfig)> {
    let mut tiers: Vec<_> = Level::PRESETS
        .into_iter()
        .map(|level| (level.name(), level.config()))
        .collect();
    tiers.push(("max", GameConfig::new((40, 40), 800)));
    tiers.push(("packed", GameConfig::new((40, 40), u16::MAX)));
    tiers
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in tiers() {
        let start = (config.size.0 / 2, config.size.1 / 2);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                black_box(
                    RandomMineFieldGenerator::new(seed, start, SafeZone::Neighborhood)
                        .generate(config),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
