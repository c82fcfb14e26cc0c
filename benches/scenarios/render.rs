//! One second of the full loop: synthesis, post-processing and encoding.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};
use mirror_ambient::{
    dsp::oscillator::RandomNoise, io::wav::encode_wav, AmbientLoopGenerator, AmbientParams,
};

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/render");

    for &rate in &[22_050u32, 44_100] {
        let params = AmbientParams::new()
            .sample_rate(rate)
            .duration_secs(1.0)
            .fade_secs(0.25);
        let generator = match AmbientLoopGenerator::new(params) {
            Ok(generator) => generator,
            Err(err) => panic!("bench params rejected: {err}"),
        };
        group.throughput(Throughput::Elements(params.frames() as u64));

        let mut noise = RandomNoise::seeded(0);
        group.bench_with_input(BenchmarkId::new("synthesize", rate), &rate, |b, _| {
            b.iter(|| black_box(generator.synthesize(&mut noise)))
        });

        group.bench_with_input(BenchmarkId::new("render", rate), &rate, |b, _| {
            b.iter(|| black_box(generator.render(&mut noise)))
        });

        let (buffer, _) = generator.render(&mut noise);
        group.bench_with_input(BenchmarkId::new("encode_wav", rate), &rate, |b, _| {
            b.iter(|| black_box(encode_wav(black_box(&buffer))))
        });
    }

    group.finish();
}
