//! Criterion benchmarks for sampler_distributions.
//!
//! Compares the per-call multivariate sampler (factorise every draw) with
//! the prepared form (factorise once) across dimensions, plus scalar batch
//! throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sampler_core::math::linalg::Matrix;
use sampler_distributions::multivariate::{normal, MultivariateNormal};
use sampler_distributions::rng::SamplerRng;
use sampler_distributions::univariate::{Gamma, Normal};
use sampler_distributions::Sampleable;

/// Exponentially decaying correlation, SPD for any n.
fn ar1_covariance(n: usize, rho: f64) -> Matrix<f64> {
    let mut m = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            m.set(i, j, rho.powi((i as i32 - j as i32).abs()));
        }
    }
    m
}

fn bench_multivariate_normal(c: &mut Criterion) {
    let mut group = c.benchmark_group("multivariate_normal");

    for dim in [2, 8, 32, 128] {
        let cov = ar1_covariance(dim, 0.6);
        let mean = vec![0.0; dim];

        group.bench_with_input(BenchmarkId::new("per_call", dim), &dim, |b, _| {
            let mut rng = SamplerRng::from_seed(42);
            b.iter(|| normal::sample(&mut rng, black_box(&mean), black_box(&cov)).unwrap());
        });

        let mvn = MultivariateNormal::new(&mean, &cov).unwrap();
        group.bench_with_input(BenchmarkId::new("prepared", dim), &mvn, |b, mvn| {
            let mut rng = SamplerRng::from_seed(42);
            b.iter(|| mvn.sample(&mut rng));
        });

        group.bench_with_input(BenchmarkId::new("ln_pdf", dim), &mvn, |b, mvn| {
            let x = vec![0.1; dim];
            b.iter(|| mvn.ln_pdf(black_box(&x)).unwrap());
        });
    }

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_parallel_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("multivariate_batch");
    let cov = ar1_covariance(16, 0.6);
    let mvn = MultivariateNormal::new(&[0.0; 16], &cov).unwrap();

    for n in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            let mut rng = SamplerRng::from_seed(7);
            b.iter(|| mvn.sample_n(&mut rng, n));
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, &n| {
            let mut rng = SamplerRng::from_seed(7);
            b.iter(|| mvn.par_sample_n(&mut rng, n));
        });
    }

    group.finish();
}

#[cfg(not(feature = "parallel"))]
fn bench_parallel_batch(_c: &mut Criterion) {}

fn bench_univariate_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("univariate_batch");
    let normal = Normal::new(0.0, 1.0).unwrap();
    let gamma = Gamma::new(2.0, 3.0).unwrap();

    for n in [100, 10_000] {
        group.bench_with_input(BenchmarkId::new("normal", n), &n, |b, &n| {
            let mut rng = SamplerRng::from_seed(1);
            b.iter(|| normal.sample_n(&mut rng, black_box(n)));
        });
        group.bench_with_input(BenchmarkId::new("gamma", n), &n, |b, &n| {
            let mut rng = SamplerRng::from_seed(1);
            b.iter(|| gamma.sample_n(&mut rng, black_box(n)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_multivariate_normal,
    bench_parallel_batch,
    bench_univariate_batch
);
criterion_main!(benches);
