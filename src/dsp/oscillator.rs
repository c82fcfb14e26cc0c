use std::f64::consts::TAU;

use rand::{rngs::StdRng, rngs::ThreadRng, Rng, SeedableRng};

/*
Oscillators and Noise
=====================

The loop is rendered offline from an absolute clock, so oscillators here are
stateless: a sine is evaluated directly at time `t` instead of accumulating a
phase increment per sample.

    sine(f, t) = sin(2π · f · t)

Time and phase are computed in f64. A three-minute buffer at 44.1 kHz puts the
phase of a 110 Hz partial past 120 000 radians, where f32 only resolves steps
of ~0.008 rad and the pad would audibly wobble.

Noise is the one non-deterministic input. Sources implement `NoiseSource` so
the generator can be driven by a fresh RNG, a seeded RNG, or a fixed sequence.
*/

/// Sine of frequency `frequency_hz` evaluated at absolute time `t` seconds.
#[inline]
pub fn sine_at(frequency_hz: f64, t: f64) -> f64 {
    (TAU * frequency_hz * t).sin()
}

/// Source of uniform bipolar noise in [-1.0, 1.0].
pub trait NoiseSource {
    fn next_bipolar(&mut self) -> f32;
}

/// Uniform white noise drawn from any `rand` RNG.
pub struct RandomNoise<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomNoise<ThreadRng> {
    /// Fresh, unseeded noise. Output differs on every run.
    pub fn unseeded() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RandomNoise<StdRng> {
    /// Reproducible noise. Same seed, same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NoiseSource for RandomNoise<R> {
    #[inline]
    fn next_bipolar(&mut self) -> f32 {
        self.rng.gen_range(-1.0..=1.0)
    }
}

/// Replays a fixed list of values, wrapping at the end.
///
/// An empty list yields silence.
#[derive(Debug, Clone)]
pub struct SequenceNoise {
    values: Vec<f32>,
    position: usize,
}

impl SequenceNoise {
    pub fn new(values: Vec<f32>) -> Self {
        Self {
            values: values.into_iter().map(|v| v.clamp(-1.0, 1.0)).collect(),
            position: 0,
        }
    }

    pub fn silence() -> Self {
        Self::new(Vec::new())
    }
}

impl NoiseSource for SequenceNoise {
    fn next_bipolar(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        value
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn next_bipolar(&mut self) -> f32 {
        (**self).next_bipolar()
    }
}
