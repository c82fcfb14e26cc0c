//! Whole-loop benchmarks.

mod render;

pub use render::bench_render;
