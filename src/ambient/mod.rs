// Purpose - the ambient loop itself: parameters, layers, rendering

pub mod buffer;
pub mod generator;
pub mod layers;
pub mod params;

pub use buffer::StereoBuffer;
pub use generator::{AmbientLoopGenerator, LoopSummary};
pub use params::AmbientParams;
