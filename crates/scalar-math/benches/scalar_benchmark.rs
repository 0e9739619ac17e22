// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use scalar_math::prelude::*;
use std::hint::black_box;

fn gen_inputs(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-1.0e3..1.0e3)).collect()
}

fn bench_rounded_ops(c: &mut Criterion) {
    let inputs = gen_inputs(1024, 42);
    let mut group = c.benchmark_group("rounded_ops");
    group.throughput(Throughput::Elements(inputs.len() as u64));

    group.bench_function("add", |b| {
        b.iter(|| {
            inputs
                .windows(2)
                .map(|w| add(black_box(w[0]), black_box(w[1])))
                .sum::<f64>()
        })
    });

    group.bench_function("add_exact", |b| {
        b.iter(|| {
            inputs
                .windows(2)
                .map(|w| add_with_precision(black_box(w[0]), black_box(w[1]), Precision::Exact))
                .sum::<f64>()
        })
    });

    group.bench_function("tangent", |b| {
        b.iter(|| {
            inputs
                .iter()
                .map(|&x| tangent(black_box(x)).unwrap_or(0.0))
                .sum::<f64>()
        })
    });

    group.finish();
}

fn bench_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast");
    for &n in &[16usize, 1024, 65536] {
        let inputs = gen_inputs(n, 7);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("multiply_vector", n), &inputs, |b, v| {
            b.iter(|| multiply_vector(black_box(1.5), black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("add_to_vector", n), &inputs, |b, v| {
            b.iter(|| add_to_vector(black_box(1.5), black_box(v)))
        });
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    group.bench_function("secure_random_int", |b| {
        b.iter(|| random_int(black_box(1), black_box(10)))
    });
    group.bench_function("fast_random_int", |b| {
        b.iter(|| fast_random_int(black_box(1), black_box(10)))
    });
    let mut rng = SmallRng::seed_from_u64(1);
    group.bench_function("fast_random_int_small_rng", |b| {
        b.iter(|| fast_random_int_with(&mut rng, black_box(1), black_box(10)))
    });
    group.finish();
}

criterion_group!(benches, bench_rounded_ops, bench_broadcast, bench_random);
criterion_main!(benches);
