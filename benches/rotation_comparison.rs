use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rotate::generate::{generate, SequenceSource};
use rotate::slice_utils::rotate_slice;

fn rotate_with_buffer(s: &mut [i64], k: usize) {
    let buffer: Vec<i64> = s[s.len() - k..]
        .iter()
        .chain(&s[..s.len() - k])
        .copied()
        .collect();

    s.copy_from_slice(&buffer);
}

pub fn rotation_comparison(c: &mut Criterion) {
    let mut g = c.benchmark_group("rotation");

    for len in [16, 1_024, 65_536] {
        let seq = generate(len, i64::MIN..=i64::MAX, SequenceSource::Seeded(42))
            .expect("valid range");
        let k = len / 3;

        g.bench_with_input(BenchmarkId::new("triple_reversal", len), &seq, |b, seq| {
            let mut s = seq.0.clone();
            b.iter(|| rotate_slice(black_box(&mut s), black_box(k as i64)))
        });

        g.bench_with_input(BenchmarkId::new("std_rotate_right", len), &seq, |b, seq| {
            let mut s = seq.0.clone();
            b.iter(|| black_box(&mut s).rotate_right(black_box(k)))
        });

        g.bench_with_input(BenchmarkId::new("buffer_copy", len), &seq, |b, seq| {
            let mut s = seq.0.clone();
            b.iter(|| rotate_with_buffer(black_box(&mut s), black_box(k)))
        });
    }

    g.finish();
}

criterion_group!(rotation, rotation_comparison);
criterion_main!(rotation);
