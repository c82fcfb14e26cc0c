//! Synthesis parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{AmbientError, Result};

/// The loop is always stereo.
pub const CHANNELS: u16 = 2;
/// Bytes per 16-bit PCM sample.
pub const BYTES_PER_SAMPLE: u16 = 2;

pub const MIN_SAMPLE_RATE: u32 = 8_000;
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Parameters fixed for the duration of one generation run.
///
/// Defaults reproduce the loop shipped with the app: three minutes of a 55 Hz
/// pad over a 40 Hz drone at 44.1 kHz, with 8 s fades and 0.85 peak.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientParams {
    pub sample_rate: u32,
    pub duration_secs: f64,
    pub pad_hz: f64,
    pub drone_hz: f64,
    pub fade_secs: f64,
    pub target_peak: f32,
}

impl Default for AmbientParams {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            duration_secs: 180.0,
            pad_hz: 55.0,
            drone_hz: 40.0,
            fade_secs: 8.0,
            target_peak: 0.85,
        }
    }
}

impl AmbientParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn duration_secs(mut self, duration_secs: f64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn pad_hz(mut self, pad_hz: f64) -> Self {
        self.pad_hz = pad_hz;
        self
    }

    pub fn drone_hz(mut self, drone_hz: f64) -> Self {
        self.drone_hz = drone_hz;
        self
    }

    pub fn fade_secs(mut self, fade_secs: f64) -> Self {
        self.fade_secs = fade_secs;
        self
    }

    pub fn target_peak(mut self, target_peak: f32) -> Self {
        self.target_peak = target_peak;
        self
    }

    /// Frames per channel: `sample_rate × duration_secs`, rounded.
    pub fn frames(&self) -> usize {
        (self.sample_rate as f64 * self.duration_secs).round() as usize
    }

    /// Size of the interleaved PCM payload in bytes.
    pub fn data_bytes(&self) -> u64 {
        self.frames() as u64 * CHANNELS as u64 * BYTES_PER_SAMPLE as u64
    }

    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            return Err(AmbientError::invalid(
                "sample_rate",
                format!(
                    "{} Hz (must be between {} and {})",
                    self.sample_rate, MIN_SAMPLE_RATE, MAX_SAMPLE_RATE
                ),
            ));
        }

        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(AmbientError::invalid(
                "duration_secs",
                format!("{} (must be a positive number of seconds)", self.duration_secs),
            ));
        }

        if self.frames() == 0 {
            return Err(AmbientError::invalid(
                "duration_secs",
                format!("{} s is shorter than one frame", self.duration_secs),
            ));
        }

        // RIFF sizes are 32-bit; the header itself takes 36 bytes of the count
        if self.data_bytes() + 36 > u32::MAX as u64 {
            return Err(AmbientError::invalid(
                "duration_secs",
                format!("{} s does not fit in a WAV file", self.duration_secs),
            ));
        }

        // The pad's overtone sits at twice the base
        let nyquist = self.nyquist();
        if !self.pad_hz.is_finite() || self.pad_hz <= 0.0 || self.pad_hz * 2.0 >= nyquist {
            return Err(AmbientError::invalid(
                "pad_hz",
                format!("{} Hz (overtone must stay below {} Hz)", self.pad_hz, nyquist),
            ));
        }

        if !self.drone_hz.is_finite() || self.drone_hz <= 0.0 || self.drone_hz >= nyquist {
            return Err(AmbientError::invalid(
                "drone_hz",
                format!("{} Hz (must be between 0 and {} Hz)", self.drone_hz, nyquist),
            ));
        }

        if !self.fade_secs.is_finite() || self.fade_secs < 0.0 {
            return Err(AmbientError::invalid(
                "fade_secs",
                format!("{} (must be zero or more seconds)", self.fade_secs),
            ));
        }

        if !self.target_peak.is_finite() || self.target_peak <= 0.0 || self.target_peak > 1.0 {
            return Err(AmbientError::invalid(
                "target_peak",
                format!("{} (must be in (0, 1])", self.target_peak),
            ));
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl AmbientParams {
    /// Parse a JSON preset. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_preset(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
