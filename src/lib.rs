pub mod ambient; // Loop parameters, layers and rendering
pub mod analysis;
pub mod dsp;
pub mod error;
pub mod io;

pub use ambient::{AmbientLoopGenerator, AmbientParams, LoopSummary, StereoBuffer};
pub use error::{AmbientError, Result};

/// Where the web client expects the loop, relative to the repository root.
pub const DEFAULT_OUTPUT_PATH: &str = "frontend/public/calm_loop.wav";
