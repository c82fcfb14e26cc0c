//! Command-line flags and how they resolve into synthesis parameters

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use mirror_ambient::{AmbientParams, DEFAULT_OUTPUT_PATH};

/// Every flag can also come from the environment. Precedence is
/// flag/env > preset file > built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "calm-loop")]
#[command(about = "Render the seamless ambient loop played by the Mirror web client")]
#[command(version)]
pub struct Cli {
    /// Output WAV file (replaced if it exists)
    #[arg(short, long, env = "CALM_LOOP_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// JSON preset with synthesis parameters
    #[arg(long, env = "CALM_LOOP_PRESET")]
    pub preset: Option<PathBuf>,

    /// Loop length in seconds
    #[arg(short, long, env = "CALM_LOOP_DURATION")]
    pub duration: Option<f64>,

    /// Sample rate in Hz
    #[arg(short = 'r', long, env = "CALM_LOOP_SAMPLE_RATE")]
    pub sample_rate: Option<u32>,

    /// Base frequency of the pad in Hz
    #[arg(long, env = "CALM_LOOP_PAD_HZ")]
    pub pad_hz: Option<f64>,

    /// Frequency of the low drone in Hz
    #[arg(long, env = "CALM_LOOP_DRONE_HZ")]
    pub drone_hz: Option<f64>,

    /// Length of the fade at each end of the loop, in seconds
    #[arg(long, env = "CALM_LOOP_FADE")]
    pub fade: Option<f64>,

    /// Peak level after normalization (0, 1]
    #[arg(long, env = "CALM_LOOP_PEAK")]
    pub peak: Option<f32>,

    /// Seed the noise texture for a bit-reproducible render
    #[arg(long, env = "CALM_LOOP_SEED")]
    pub seed: Option<u64>,

    /// Log level, seam and spectrum measurements of the render
    #[arg(long)]
    pub report: bool,
}

impl Cli {
    pub fn params(&self) -> Result<AmbientParams> {
        let mut params = match &self.preset {
            Some(path) => AmbientParams::load_preset(path)
                .wrap_err_with(|| format!("failed to load preset {}", path.display()))?,
            None => AmbientParams::default(),
        };

        if let Some(duration) = self.duration {
            params.duration_secs = duration;
        }
        if let Some(sample_rate) = self.sample_rate {
            params.sample_rate = sample_rate;
        }
        if let Some(pad_hz) = self.pad_hz {
            params.pad_hz = pad_hz;
        }
        if let Some(drone_hz) = self.drone_hz {
            params.drone_hz = drone_hz;
        }
        if let Some(fade) = self.fade {
            params.fade_secs = fade;
        }
        if let Some(peak) = self.peak {
            params.target_peak = peak;
        }

        params.validate().wrap_err("invalid synthesis parameters")?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_loop() {
        let cli = Cli::try_parse_from(["calm-loop"]).unwrap();
        let params = cli.params().unwrap();
        assert_eq!(params, AmbientParams::default());
        assert!(!cli.report);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "calm-loop",
            "--duration",
            "1",
            "-r",
            "8000",
            "--fade",
            "0.5",
            "--seed",
            "7",
            "-o",
            "out.wav",
        ])
        .unwrap();
        let params = cli.params().unwrap();

        assert_eq!(params.sample_rate, 8_000);
        assert_eq!(params.duration_secs, 1.0);
        assert_eq!(params.fade_secs, 0.5);
        assert_eq!(params.pad_hz, 55.0);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.output, PathBuf::from("out.wav"));
    }

    #[test]
    fn test_flags_override_preset() {
        let dir = tempfile::tempdir().unwrap();
        let preset = dir.path().join("short.json");
        std::fs::write(&preset, r#"{ "duration_secs": 30.0, "pad_hz": 65.0 }"#).unwrap();

        let cli = Cli::try_parse_from([
            "calm-loop",
            "--preset",
            preset.to_str().unwrap(),
            "--pad-hz",
            "49",
        ])
        .unwrap();
        let params = cli.params().unwrap();

        assert_eq!(params.duration_secs, 30.0);
        assert_eq!(params.pad_hz, 49.0);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let cli = Cli::try_parse_from(["calm-loop", "--peak", "2.0"]).unwrap();
        let err = cli.params().unwrap_err();
        assert!(format!("{:?}", err).contains("target_peak"));
    }
}
