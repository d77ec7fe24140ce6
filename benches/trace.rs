use criterion::{criterion_group, criterion_main, Criterion};
use lensray::{millimeter, radian, sources::DivergentSource, OpticalSystem, RayTraceConfig};

fn bench_system(parallel: bool) -> OpticalSystem {
    let mut system = OpticalSystem::new();
    system.add_lens(millimeter!(50.0), millimeter!(40.0)).unwrap();
    system.add_lens(millimeter!(120.0), millimeter!(-60.0)).unwrap();
    system.add_lens(millimeter!(200.0), millimeter!(100.0)).unwrap();
    system.set_source(
        DivergentSource::new(millimeter!(0.0), millimeter!(10.0), radian!(0.2)).unwrap(),
    );
    let mut config = RayTraceConfig::default();
    config.set_nr_of_rays(100).unwrap();
    config.set_parallel(parallel);
    system.set_config(config);
    system
}

fn criterion_trace(c: &mut Criterion) {
    let mut system = bench_system(false);
    c.bench_function("trace 10000 rays", |b| {
        b.iter(|| system.trace_rays(millimeter!(400.0)).unwrap())
    });
}

fn criterion_trace_parallel(c: &mut Criterion) {
    let mut system = bench_system(true);
    c.bench_function("trace 10000 rays (parallel)", |b| {
        b.iter(|| system.trace_rays(millimeter!(400.0)).unwrap())
    });
}

criterion_group!(benches, criterion_trace, criterion_trace_parallel);
criterion_main!(benches);
