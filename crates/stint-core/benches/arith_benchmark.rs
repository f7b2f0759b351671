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
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use stint_core::{I64, U32};

const SIZES: [usize; 3] = [1_024, 16_384, 262_144];

fn random_u32s(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random()).collect()
}

fn random_i64s(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    // Keep divisors non-zero.
    (0..n).map(|_| rng.random::<i64>() | 1).collect()
}

/// A mix of operations the strong types must lower to the same code as the
/// native ones.
#[inline(never)]
fn mix_native(values: &[u32]) -> u32 {
    values.iter().fold(0u32, |acc, &v| {
        (acc.wrapping_mul(31).wrapping_add(v) ^ (v >> 3)).rotate_left(1)
    })
}

#[inline(never)]
fn mix_strong(values: &[U32]) -> U32 {
    values.iter().fold(U32::ZERO, |acc, &v| {
        let x = (acc * U32::new(31) + v) ^ (v >> 3u32);
        (x << 1u32) | (x >> 31u32)
    })
}

#[inline(never)]
fn div_native(values: &[i64]) -> i64 {
    values
        .windows(2)
        .fold(0i64, |acc, w| acc.wrapping_add(w[0].wrapping_div(w[1])))
}

#[inline(never)]
fn div_strong(values: &[I64]) -> I64 {
    values
        .windows(2)
        .fold(I64::ZERO, |acc, w| acc + w[0] / w[1])
}

fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("arith_mix");

    for &n in &SIZES {
        let native = random_u32s(n, 0xC0FFEE);
        let strong: Vec<U32> = native.iter().copied().map(U32::new).collect();

        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("native", n), &native, |b, values| {
            b.iter(|| mix_native(black_box(values)))
        });
        group.bench_with_input(BenchmarkId::new("strong", n), &strong, |b, values| {
            b.iter(|| mix_strong(black_box(values)))
        });
    }
    group.finish();
}

fn bench_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("arith_div");

    for &n in &SIZES {
        let native = random_i64s(n, 0xBEEF);
        let strong: Vec<I64> = native.iter().copied().map(I64::new).collect();

        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("native", n), &native, |b, values| {
            b.iter(|| div_native(black_box(values)))
        });
        group.bench_with_input(BenchmarkId::new("strong", n), &strong, |b, values| {
            b.iter(|| div_strong(black_box(values)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mix, bench_div);
criterion_main!(benches);
