//! Benchmarks for peak normalization and quantization.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use mirror_ambient::dsp::amplify::{normalize_to, to_pcm_i16};

use crate::BUFFER_SIZES;

pub fn bench_amplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/amplify");

    for &size in BUFFER_SIZES {
        let left: Vec<f32> = (0..size).map(|i| ((i as f32) * 0.01).sin() * 0.3).collect();
        let right: Vec<f32> = (0..size).map(|i| ((i as f32) * 0.013).cos() * 0.2).collect();

        let mut work_left = left.clone();
        let mut work_right = right.clone();
        group.bench_with_input(BenchmarkId::new("normalize", size), &size, |b, _| {
            b.iter(|| {
                work_left.copy_from_slice(&left);
                work_right.copy_from_slice(&right);
                black_box(normalize_to(
                    &mut [&mut work_left[..], &mut work_right[..]],
                    black_box(0.85),
                ))
            })
        });

        group.bench_with_input(BenchmarkId::new("to_pcm_i16", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0i32;
                for &sample in &left {
                    acc = acc.wrapping_add(to_pcm_i16(black_box(sample)) as i32);
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}
