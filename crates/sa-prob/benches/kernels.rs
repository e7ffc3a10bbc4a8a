use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sa_ad::Dual;
use sa_prob::{interp, multifan};
use std::hint::black_box;

fn bench_approx1(c: &mut Criterion) {
    let mut group = c.benchmark_group("interp");

    for n in [8usize, 64, 512, 4096] {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();

        group.bench_with_input(BenchmarkId::new("approx1", n), &n, |b, &n| {
            let mut v = 0.37;
            b.iter(|| {
                v = (v + 0.61) % (n as f64 - 2.0);
                black_box(interp::approx1(black_box(v), &x, &y))
            })
        });
    }

    group.finish();
}

fn bench_dmultifan(c: &mut Criterion) {
    let mut group = c.benchmark_group("multifan");

    for n_classes in [10usize, 40, 160] {
        let o: Vec<f64> = (0..n_classes).map(|i| ((i % 7) + 1) as f64).collect();
        let p: Vec<f64> = (0..n_classes).map(|i| 1.0 + (i as f64 * 0.3).sin().abs()).collect();
        let pd: Vec<Dual> = p.iter().map(|&v| Dual::var(v)).collect();

        group.bench_with_input(BenchmarkId::new("plain", n_classes), &n_classes, |b, _| {
            b.iter(|| black_box(multifan::dmultifan(&o, &p, 100.0)))
        });

        group.bench_with_input(BenchmarkId::new("dual", n_classes), &n_classes, |b, _| {
            b.iter(|| black_box(multifan::dmultifan(&o, &pd, 100.0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_approx1, bench_dmultifan);
criterion_main!(benches);
