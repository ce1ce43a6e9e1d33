use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sigcga::{
    benchmarks::Problem,
    history::HistoryKind,
    optimizer::{Cga, CgaOptions, OnePlusOneEa, Optimizer, SigCga, SigCgaOptions},
    rng::RandomNumberGenerator,
};

fn bench_one_max(c: &mut Criterion) {
    let n = 100;
    let budget = Problem::OneMax.budget(n).unwrap();
    let k = (n as f64).sqrt() * (n as f64).ln();

    let mut group = c.benchmark_group("one_max_100");
    group.sample_size(20);

    group.bench_function("1+1_EA", |b| {
        let mut ea = OnePlusOneEa::new(n).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        b.iter(|| ea.run(black_box(&Problem::OneMax), &budget, &mut rng).unwrap())
    });

    group.bench_function("cGA", |b| {
        let mut cga = Cga::new(CgaOptions::new(n, k)).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        b.iter(|| cga.run(black_box(&Problem::OneMax), &budget, &mut rng).unwrap())
    });

    for (kind, name) in [
        (HistoryKind::Simple, "sig-cGA-Simp"),
        (HistoryKind::Doubling, "sig-cGA-Orig"),
    ] {
        group.bench_function(name, |b| {
            let mut sig = SigCga::new(SigCgaOptions::new(n, 1.0, kind)).unwrap();
            let mut rng = RandomNumberGenerator::from_seed(42);
            b.iter(|| sig.run(black_box(&Problem::OneMax), &budget, &mut rng).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_one_max);
criterion_main!(benches);
