//! calm-loop - render the Mirror ambient loop
//!
//! Run with: cargo run --bin calm-loop -- --help

mod cli;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use mirror_ambient::{
    analysis::LoopReport, dsp::oscillator::RandomNoise, io::wav, AmbientLoopGenerator,
};

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let params = cli.params()?;
    let generator = AmbientLoopGenerator::new(params)?;

    info!(
        "Generating {}s ambient WAV ({}Hz stereo) ...",
        params.duration_secs, params.sample_rate
    );

    let (buffer, gain) = match cli.seed {
        Some(seed) => {
            info!(seed, "noise texture seeded");
            generator.render(&mut RandomNoise::seeded(seed))
        }
        None => generator.render(&mut RandomNoise::unseeded()),
    };

    if cli.report {
        log_report(&LoopReport::analyze(&buffer), gain);
    }

    let bytes = wav::write_wav_file(&cli.output, &buffer)
        .wrap_err_with(|| format!("failed to write {}", cli.output.display()))?;

    info!(
        "WAV written to {} ({:.1}s, {} bytes)",
        cli.output.display(),
        buffer.duration_secs(),
        bytes
    );

    Ok(())
}

fn log_report(report: &LoopReport, gain: f32) {
    info!(
        "Normalization gain {:.3}, peak {:.3}",
        gain,
        report.peak()
    );
    for (name, channel) in [("L", &report.left), ("R", &report.right)] {
        info!(
            "  {}: rms {:.4}, first {:+.6}, last {:+.6}, seam jump {:.6}",
            name, channel.rms, channel.first, channel.last, channel.seam_jump
        );
    }
    match report.dominant_hz {
        Some(hz) => info!("  Dominant tone: {:.1} Hz", hz),
        None => info!("  Dominant tone: none (silent)"),
    }
}
