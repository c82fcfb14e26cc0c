//! Loop inspection: levels, seam continuity and a coarse spectrum probe.
//!
//! Used by `calm-loop --report` to sanity-check a render without listening to
//! three minutes of it.

use std::f32::consts::PI;

use rustfft::{num_complex::Complex, Fft, FftPlanner};

use crate::ambient::StereoBuffer;

/// Longest segment fed to the FFT (~1.5 s at 44.1 kHz).
const MAX_FFT_LEN: usize = 1 << 16;

/// Frequencies below this are ignored when looking for the dominant tone.
pub const AUDIBLE_FLOOR_HZ: f32 = 20.0;

/// Hann window - reduces spectral leakage
pub fn hann_window(len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| {
            if len > 1 {
                let denom = (len - 1) as f32;
                0.5 * (1.0 - (2.0 * PI * i as f32 / denom).cos())
            } else {
                1.0
            }
        })
        .collect()
}

pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum / samples.len() as f64).sqrt() as f32
}

/// Frequency of the strongest FFT bin at or above `min_hz`.
///
/// Analyzes a centered segment of at most `MAX_FFT_LEN` samples. Returns
/// `None` for inputs too short to analyze or with no energy above `min_hz`.
pub fn dominant_frequency(samples: &[f32], sample_rate: u32, min_hz: f32) -> Option<f32> {
    let len = samples.len().min(MAX_FFT_LEN);
    if len < 2 {
        return None;
    }
    let start = (samples.len() - len) / 2;

    let window = hann_window(len);
    let mut spectrum: Vec<Complex<f32>> = samples[start..start + len]
        .iter()
        .zip(&window)
        .map(|(&s, &w)| Complex::new(s * w, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(len);
    fft.process(&mut spectrum);

    let bin_hz = sample_rate as f32 / len as f32;
    let first_bin = ((min_hz / bin_hz).ceil() as usize).max(1);

    let (bin, magnitude) = spectrum
        .iter()
        .enumerate()
        .take(len / 2 + 1)
        .skip(first_bin)
        .map(|(i, c)| (i, c.norm()))
        .fold((0, 0.0f32), |best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        });

    (magnitude > 0.0).then(|| bin as f32 * bin_hz)
}

/// Level and seam measurements for one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelReport {
    pub peak: f32,
    pub rms: f32,
    pub first: f32,
    pub last: f32,
    /// Jump heard when playback wraps from the last sample to the first.
    pub seam_jump: f32,
}

impl ChannelReport {
    pub fn measure(samples: &[f32]) -> Self {
        let first = samples.first().copied().unwrap_or(0.0);
        let last = samples.last().copied().unwrap_or(0.0);
        Self {
            peak: samples.iter().fold(0.0f32, |acc, &x| acc.max(x.abs())),
            rms: rms(samples),
            first,
            last,
            seam_jump: (last - first).abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopReport {
    pub duration_secs: f64,
    pub left: ChannelReport,
    pub right: ChannelReport,
    /// Strongest audible frequency of the left channel.
    pub dominant_hz: Option<f32>,
}

impl LoopReport {
    pub fn analyze(buffer: &StereoBuffer) -> Self {
        Self {
            duration_secs: buffer.duration_secs(),
            left: ChannelReport::measure(&buffer.left),
            right: ChannelReport::measure(&buffer.right),
            dominant_hz: dominant_frequency(&buffer.left, buffer.sample_rate, AUDIBLE_FLOOR_HZ),
        }
    }

    pub fn peak(&self) -> f32 {
        self.left.peak.max(self.right.peak)
    }

    pub fn max_seam_jump(&self) -> f32 {
        self.left.seam_jump.max(self.right.seam_jump)
    }
}
