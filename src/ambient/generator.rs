use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use super::{
    buffer::StereoBuffer,
    layers::{Drone, Gust, Pad, Texture},
    params::AmbientParams,
};
use crate::{
    dsp::{
        amplify,
        envelope::{fade_samples, LoopFade},
        filter::StereoSmoother,
        mix::{FrameLayers, StereoMix},
        oscillator::NoiseSource,
    },
    error::Result,
    io::wav,
};

/// Retention of the final stereo smoother.
const SMOOTHING: f32 = 0.999;

/// What a finished run produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSummary {
    pub frames: usize,
    pub duration_secs: f64,
    pub bytes_written: u64,
    pub gain: f32,
}

/// Renders the seamless ambient loop described by `AmbientParams`.
///
/// Rendering happens in three passes over one buffer:
///
/// 1. `synthesize` - layers mixed frame by frame, filter state carried forward
/// 2. `apply_loop_fades` - linear head/tail ramps so the seam lands on silence
/// 3. `normalize` - one gain for both channels so the peak hits the target
pub struct AmbientLoopGenerator {
    params: AmbientParams,
    pad: Pad,
    drone: Drone,
    gust: Gust,
    mix: StereoMix,
}

impl AmbientLoopGenerator {
    /// Create a generator after checking `params`.
    pub fn new(params: AmbientParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            pad: Pad::new(params.pad_hz),
            drone: Drone::new(params.drone_hz),
            gust: Gust::default(),
            mix: StereoMix::default(),
        })
    }

    pub fn params(&self) -> &AmbientParams {
        &self.params
    }

    /// Mix every layer into a fresh buffer. No fades, no normalization.
    pub fn synthesize<N: NoiseSource>(&self, noise: &mut N) -> StereoBuffer {
        let frames = self.params.frames();
        let sample_rate = self.params.sample_rate;
        let mut buffer = StereoBuffer::silent(frames, sample_rate);

        let mut texture = Texture::default();
        let mut smoother = StereoSmoother::new(SMOOTHING);

        for (i, (left, right)) in buffer
            .left
            .iter_mut()
            .zip(buffer.right.iter_mut())
            .enumerate()
        {
            let t = i as f64 / sample_rate as f64;
            let (texture_left, texture_right) = texture.next_frame(noise);

            let layers = FrameLayers {
                pad: self.pad.sample_at(t) as f32,
                drone: self.drone.sample_at(t) as f32,
                texture_left,
                texture_right,
                gust: self.gust.sample_at(t) as f32,
            };

            let (l, r) = self.mix.mix(&layers);
            (*left, *right) = smoother.next_frame(l, r);
        }

        buffer
    }

    /// Fade both ends of the loop to silence.
    pub fn apply_loop_fades(&self, buffer: &mut StereoBuffer) {
        let length = fade_samples(buffer.frames(), buffer.sample_rate, self.params.fade_secs);
        let fade = LoopFade::new(length);
        for channel in buffer.channels_mut() {
            fade.apply(channel);
        }
    }

    /// Scale both channels so the joint peak equals the target. Returns the gain.
    pub fn normalize(&self, buffer: &mut StereoBuffer) -> f32 {
        amplify::normalize_to(&mut buffer.channels_mut(), self.params.target_peak)
    }

    /// Synthesize, fade and normalize. Returns the finished loop and the
    /// normalization gain.
    pub fn render<N: NoiseSource>(&self, noise: &mut N) -> (StereoBuffer, f32) {
        info!(
            duration_secs = self.params.duration_secs,
            sample_rate = self.params.sample_rate,
            frames = self.params.frames(),
            "rendering ambient loop"
        );

        let started = Instant::now();
        let mut buffer = self.synthesize(noise);
        debug!(elapsed = ?started.elapsed(), "layers synthesized");

        self.apply_loop_fades(&mut buffer);
        let gain = self.normalize(&mut buffer);
        debug!(gain, elapsed = ?started.elapsed(), "fades and normalization applied");

        (buffer, gain)
    }

    /// Render the loop and write it to `path` as 16-bit PCM WAV.
    pub fn generate_to_file<N: NoiseSource>(
        &self,
        path: &Path,
        noise: &mut N,
    ) -> Result<LoopSummary> {
        let (buffer, gain) = self.render(noise);
        let bytes_written = wav::write_wav_file(path, &buffer)?;

        info!(
            path = %path.display(),
            duration_secs = buffer.duration_secs(),
            bytes = bytes_written,
            "ambient loop written"
        );

        Ok(LoopSummary {
            frames: buffer.frames(),
            duration_secs: buffer.duration_secs(),
            bytes_written,
            gain,
        })
    }
}
