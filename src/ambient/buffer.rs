/// Two equal-length channels of float samples at a known sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoBuffer {
    pub left: Vec<f32>,
    pub right: Vec<f32>,
    pub sample_rate: u32,
}

impl StereoBuffer {
    /// Zero-filled buffer of `frames` frames.
    pub fn silent(frames: usize, sample_rate: u32) -> Self {
        Self {
            left: vec![0.0; frames],
            right: vec![0.0; frames],
            sample_rate,
        }
    }

    /// Build from existing channels. The longer channel is truncated.
    pub fn from_channels(mut left: Vec<f32>, mut right: Vec<f32>, sample_rate: u32) -> Self {
        let frames = left.len().min(right.len());
        left.truncate(frames);
        right.truncate(frames);
        Self {
            left,
            right,
            sample_rate,
        }
    }

    pub fn frames(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    pub fn channels(&self) -> [&[f32]; 2] {
        [self.left.as_slice(), self.right.as_slice()]
    }

    pub fn channels_mut(&mut self) -> [&mut [f32]; 2] {
        [self.left.as_mut_slice(), self.right.as_mut_slice()]
    }

    /// L/R pairs in frame order.
    pub fn frames_iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.left.iter().copied().zip(self.right.iter().copied())
    }
}
