//! Benchmarks for loop fades.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use mirror_ambient::dsp::envelope::LoopFade;

use crate::BUFFER_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BUFFER_SIZES {
        let input = vec![0.5f32; size];
        let mut buffer = input.clone();

        // Quarter of the buffer at each end
        let fade = LoopFade::new(size / 4);
        group.bench_with_input(BenchmarkId::new("loop_fade", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                fade.apply(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
