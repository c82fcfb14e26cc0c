//! Benchmarks for one-pole filters.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use mirror_ambient::dsp::filter::{DcBlocker, OnePole, StereoSmoother};

use crate::BUFFER_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BUFFER_SIZES {
        // Ramp across the full range as a stand-in for noise
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        let mut filter = OnePole::new(0.995);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("one_pole", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer));
            })
        });

        let mut blocker = DcBlocker::new(0.999);
        group.bench_with_input(BenchmarkId::new("dc_blocker", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for &x in &input {
                    acc += blocker.next_sample(black_box(x));
                }
                black_box(acc)
            })
        });

        let mut smoother = StereoSmoother::new(0.999);
        group.bench_with_input(BenchmarkId::new("stereo_smoother", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for &x in &input {
                    let (l, r) = smoother.next_frame(black_box(x), black_box(-x));
                    acc += l - r;
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}
