//! Benchmarks for low-level DSP primitives.

mod amplify;
mod envelope;
mod filter;

pub use amplify::bench_amplify;
pub use envelope::bench_envelope;
pub use filter::bench_filter;
