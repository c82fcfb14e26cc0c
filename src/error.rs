//! Error types for loop generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type for loop generation
pub type Result<T> = std::result::Result<T, AmbientError>;

/// Errors that can occur while generating or writing the ambient loop
#[derive(Error, Debug)]
pub enum AmbientError {
    /// A synthesis parameter is outside its usable range
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParam { name: &'static str, reason: String },

    /// The directory that should receive the WAV file does not exist
    #[error("Output directory does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),

    /// WAV container encoding failed
    #[error("WAV encoding failed: {0}")]
    Wav(#[from] hound::Error),

    /// Preset file could not be parsed
    #[cfg(feature = "serde")]
    #[error("Invalid preset: {0}")]
    Preset(#[from] serde_json::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AmbientError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParam {
            name,
            reason: reason.into(),
        }
    }
}
