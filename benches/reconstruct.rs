use criterion::{criterion_group, criterion_main, Criterion};
use wavelab::config::SamplingConfig;
use wavelab::{reconstruct, sample, simulate};

fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct");

    // Interactive sizes: a short window sampled well above Nyquist
    let samples = sample(0.0, 0.02, 2000.0).unwrap();
    let ts = 1.0 / 2000.0;
    group.bench_function("single_point", |b| {
        b.iter(|| reconstruct(0.0107, &samples, ts, 20))
    });

    let cfg = SamplingConfig::default();
    group.bench_function("simulate/2000hz", |b| {
        b.iter(|| simulate(0.0, 0.02, 2000.0, &cfg))
    });
    group.finish();
}

criterion_group!(benches, bench_reconstruct);
criterion_main!(benches);
