//! The four layers of the ambient bed.
//!
//! # How It Works
//!
//! 1. **Pad**: three sines (base, +0.5% detune, octave) breathing with a slow LFO
//! 2. **Drone**: a single steady low sine under everything
//! 3. **Texture**: per-channel white noise, darkened by a one-pole low-pass and
//!    stripped of drift by a DC blocker
//! 4. **Gust**: two sub-audio sines that swell over minutes and pan the bed
//!
//! Pad, drone and gust are pure functions of time. Texture carries filter state
//! and must be advanced exactly once per frame, in order.

use crate::dsp::{
    filter::{DcBlocker, OnePole},
    lfo::BreathingLfo,
    oscillator::{sine_at, NoiseSource},
};

/// Detuned partials of the pad: (frequency ratio, weight).
const PAD_PARTIALS: [(f64, f64); 3] = [(1.0, 0.9), (1.005, 0.7), (2.0, 0.2)];

#[derive(Debug, Clone, Copy)]
pub struct Pad {
    pub base_hz: f64,
    pub level: f64,
    pub lfo: BreathingLfo,
}

impl Pad {
    pub fn new(base_hz: f64) -> Self {
        Self {
            base_hz,
            level: 0.4,
            lfo: BreathingLfo::default(),
        }
    }

    #[inline]
    pub fn sample_at(&self, t: f64) -> f64 {
        let partials: f64 = PAD_PARTIALS
            .iter()
            .map(|&(ratio, weight)| sine_at(self.base_hz * ratio, t) * weight)
            .sum();
        partials * self.level * self.lfo.value_at(t)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Drone {
    pub frequency_hz: f64,
    pub level: f64,
}

impl Drone {
    pub fn new(frequency_hz: f64) -> Self {
        Self {
            frequency_hz,
            level: 0.06,
        }
    }

    #[inline]
    pub fn sample_at(&self, t: f64) -> f64 {
        sine_at(self.frequency_hz, t) * self.level
    }
}

/// Slow swells: 0.01 Hz and 0.005 Hz sines, weighted 0.3 and 0.2.
#[derive(Debug, Clone, Copy)]
pub struct Gust {
    pub level: f64,
}

impl Default for Gust {
    fn default() -> Self {
        Self { level: 0.15 }
    }
}

impl Gust {
    #[inline]
    pub fn sample_at(&self, t: f64) -> f64 {
        (sine_at(0.01, t) * 0.3 + sine_at(0.005, t) * 0.2) * self.level
    }
}

/// One channel of filtered noise.
#[derive(Debug, Clone, Copy)]
pub struct TextureChannel {
    pub level: f32,
    darken: OnePole,
    dc: DcBlocker,
}

impl Default for TextureChannel {
    fn default() -> Self {
        Self {
            level: 0.3,
            darken: OnePole::new(0.995),
            dc: DcBlocker::new(0.999),
        }
    }
}

impl TextureChannel {
    #[inline]
    pub fn next_sample(&mut self, raw: f32) -> f32 {
        let dark = self.darken.next_sample(raw * self.level);
        self.dc.next_sample(dark)
    }

    pub fn reset(&mut self) {
        self.darken.reset();
        self.dc.reset();
    }
}

/// Independent filtered noise for left and right.
#[derive(Debug, Clone, Copy, Default)]
pub struct Texture {
    pub left: TextureChannel,
    pub right: TextureChannel,
}

impl Texture {
    /// Draw one value per channel from `noise` (left first) and filter it.
    #[inline]
    pub fn next_frame<N: NoiseSource>(&mut self, noise: &mut N) -> (f32, f32) {
        let raw_left = noise.next_bipolar();
        let raw_right = noise.next_bipolar();
        (
            self.left.next_sample(raw_left),
            self.right.next_sample(raw_right),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::SequenceNoise;

    #[test]
    fn test_pad_is_silent_at_zero() {
        let pad = Pad::new(55.0);
        assert!(pad.sample_at(0.0).abs() < 1e-12);
    }

    #[test]
    fn test_pad_peak_bounded_by_weights() {
        // 0.4 × (0.9 + 0.7 + 0.2) × max LFO 1.0
        let bound = 0.4 * 1.8 + 1e-9;
        let pad = Pad::new(55.0);
        for i in 0..44_100 {
            let value = pad.sample_at(i as f64 / 44_100.0 * 30.0);
            assert!(value.abs() <= bound, "pad sample {} exceeds {}", value, bound);
        }
    }

    #[test]
    fn test_drone_level() {
        let drone = Drone::new(40.0);
        // Quarter period of 40 Hz
        assert!((drone.sample_at(1.0 / 160.0) - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_gust_peak_level() {
        let gust = Gust::default();
        let peak = (0..18_000)
            .map(|i| gust.sample_at(i as f64 / 100.0).abs())
            .fold(0.0f64, f64::max);
        // Never more than (0.3 + 0.2) × 0.15
        assert!(peak <= 0.075 + 1e-12);
        assert!(peak > 0.05, "gust should swell noticeably, got {}", peak);
    }

    #[test]
    fn test_texture_is_zero_mean_under_constant_noise() {
        // A constant input is pure DC, which the texture must reject
        let mut texture = Texture::default();
        let mut noise = SequenceNoise::new(vec![1.0]);
        let mut last = (1.0, 1.0);
        for _ in 0..200_000 {
            last = texture.next_frame(&mut noise);
        }
        assert!(last.0.abs() < 1e-3, "left drift {}", last.0);
        assert!(last.1.abs() < 1e-3, "right drift {}", last.1);
    }

    #[test]
    fn test_texture_draws_left_then_right() {
        let mut texture = Texture::default();
        let mut noise = SequenceNoise::new(vec![1.0, -1.0]);
        let (l, r) = texture.next_frame(&mut noise);
        assert!(l > 0.0);
        assert!(r < 0.0);
        assert!((l + r).abs() < 1e-7);
    }
}
