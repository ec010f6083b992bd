//! Benchmarks for fuzzy set construction, algebra, and reduction

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fuzzyset::{MembershipFunction, Set};

fn universe(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 / 10.0).collect()
}

fn construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [101usize, 1_001, 10_001] {
        let u = universe(size);
        let center = u[u.len() / 2];
        let mf = MembershipFunction::Gaussian(center, center / 4.0);

        group.bench_with_input(BenchmarkId::new("from_membership", size), &u, |b, u| {
            b.iter(|| {
                let set = Set::from_membership(u, &mf).unwrap();
                black_box(set)
            });
        });
    }

    group.finish();
}

fn algebra_benchmark(c: &mut Criterion) {
    let u = universe(1_001);
    let bump = Set::from_membership(&u, &MembershipFunction::Gaussian(30.0, 10.0)).unwrap();
    let plateau =
        Set::from_membership(&u, &MembershipFunction::Trapezoid(20.0, 40.0, 60.0, 80.0)).unwrap();

    let mut group = c.benchmark_group("algebra");

    group.bench_function("union", |b| b.iter(|| black_box(bump.union(&plateau))));
    group.bench_function("intersection", |b| {
        b.iter(|| black_box(bump.intersection(&plateau)))
    });
    group.bench_function("complement", |b| b.iter(|| black_box(bump.complement())));

    group.finish();
}

fn reduction_benchmark(c: &mut Criterion) {
    let u = universe(1_001);
    let s = Set::from_membership(&u, &MembershipFunction::Trapezoid(10.0, 30.0, 60.0, 90.0)).unwrap();

    let mut group = c.benchmark_group("reduction");

    group.bench_function("centroid", |b| b.iter(|| black_box(s.centroid().unwrap())));
    group.bench_function("alpha_cut", |b| b.iter(|| black_box(s.alpha_cut(0.5))));
    group.bench_function("grade_lookup", |b| b.iter(|| black_box(s.grade(55.5))));

    group.finish();
}

criterion_group!(
    benches,
    construction_benchmark,
    algebra_benchmark,
    reduction_benchmark
);
criterion_main!(benches);
