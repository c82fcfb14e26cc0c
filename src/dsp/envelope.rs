/*
Loop Fades
==========

A looping player jumps from the last sample straight back to the first. If
those two samples differ, the jump is heard as a click once per loop. Fading
both ends to zero makes the seam land on silence.

The Shape: Linear Ramps
-----------------------

  Gain
    1.0 ┐    ╱‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾╲
        │   ╱                    ╲
        │  ╱                      ╲
    0.0 └─╱────────────────────────╲──→ Time
         fade in              fade out
         (F samples)         (F samples)

For offset k into a fade window of F samples:

    head gain = k / F           (0 → just under 1)
    tail gain = 1 - k / F       (1 → just over 0)

F is capped at the buffer length. When the buffer is shorter than two fade
windows, the head and tail ramps overlap and both gains apply.
*/

/// Number of samples in a fade window: `floor(sample_rate × fade_secs)`,
/// capped at `total`.
pub fn fade_samples(total: usize, sample_rate: u32, fade_secs: f64) -> usize {
    let wanted = (sample_rate as f64 * fade_secs.max(0.0)).floor() as usize;
    wanted.min(total)
}

/// Symmetric linear fade-in/fade-out applied to the ends of a buffer.
#[derive(Debug, Clone, Copy)]
pub struct LoopFade {
    pub length: usize,
}

impl LoopFade {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Gain at offset `k` of the head ramp.
    #[inline]
    pub fn head_gain(&self, k: usize) -> f32 {
        if self.length == 0 {
            return 1.0;
        }
        (k as f64 / self.length as f64) as f32
    }

    /// Gain at offset `k` of the tail ramp.
    #[inline]
    pub fn tail_gain(&self, k: usize) -> f32 {
        if self.length == 0 {
            return 1.0;
        }
        (1.0 - k as f64 / self.length as f64) as f32
    }

    pub fn apply(&self, buffer: &mut [f32]) {
        let len = self.length.min(buffer.len());
        let tail_start = buffer.len() - len;

        for k in 0..len {
            buffer[k] *= self.head_gain(k);
            buffer[tail_start + k] *= self.tail_gain(k);
        }
    }
}
