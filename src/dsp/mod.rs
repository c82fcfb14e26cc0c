//! Low-level DSP primitives used by the loop generator.
//!
//! These components are allocation-free and work one sample (or one frame) at
//! a time, so the generator can thread their state through a single pass over
//! the buffer. They stay focused on the signal-processing math; layering and
//! post-processing live in `ambient`.

/// Peak normalization and PCM quantization.
pub mod amplify;
/// Linear fade-in/fade-out at the loop seam.
pub mod envelope;
/// One-pole low-pass, DC blocker and shared stereo smoother.
pub mod filter;
/// Slow amplitude LFO.
pub mod lfo;
/// Weighted stereo summing of layers.
pub mod mix;
/// Absolute-time sines and injectable noise sources.
pub mod oscillator;

pub use oscillator::NoiseSource;
