/*
One-Pole Filters
================

The loop generator only needs the simplest recursive filter there is:

    y[n] = a · y[n-1] + (1 - a) · x[n]

`a` is the retention coefficient. The closer it sits to 1.0, the longer the
filter remembers and the darker the output.

| type          | constructed by            | passes        | rejects       |
| ------------- | ------------------------- | ------------- | ------------- |
| low-pass      | OnePole                   | slow movement | fast detail   |
| DC blocker    | x - OnePole(x)            | texture       | offset/drift  |
| stereo smooth | OnePole fed from L/R mean | slow movement | sample jumps  |

Approximate -3 dB corner for retention `a` at sample rate `fs`:

    fc ≈ (1 - a) · fs / 2π

    a = 0.995 @ 44.1 kHz  →  ~35 Hz
    a = 0.999 @ 44.1 kHz  →  ~7 Hz
*/

/// Single step of a one-pole low-pass: `a·prev + (1-a)·x`.
#[inline]
pub fn one_pole(prev: f32, x: f32, retention: f32) -> f32 {
    retention * prev + (1.0 - retention) * x
}

#[derive(Debug, Clone, Copy)]
pub struct OnePole {
    state: f32,
    pub retention: f32,
}

impl OnePole {
    pub fn new(retention: f32) -> Self {
        Self {
            state: 0.0,
            retention: retention.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn next_sample(&mut self, x: f32) -> f32 {
        self.state = one_pole(self.state, x, self.retention);
        self.state
    }

    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample);
        }
    }

    pub fn state(&self) -> f32 {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = 0.0;
    }
}

/// High-pass approximation: the input minus a slow low-pass of itself.
#[derive(Debug, Clone, Copy)]
pub struct DcBlocker {
    tracker: OnePole,
}

impl DcBlocker {
    pub fn new(retention: f32) -> Self {
        Self {
            tracker: OnePole::new(retention),
        }
    }

    #[inline]
    pub fn next_sample(&mut self, x: f32) -> f32 {
        x - self.tracker.next_sample(x)
    }

    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}

/// One-pole smoother shared by both channels.
///
/// Each channel is filtered against the same previous value, which is then
/// replaced by the mean of the two outputs. This pulls L and R toward each
/// other slightly while removing abrupt sample-to-sample jumps.
#[derive(Debug, Clone, Copy)]
pub struct StereoSmoother {
    prev: f32,
    pub retention: f32,
}

impl StereoSmoother {
    pub fn new(retention: f32) -> Self {
        Self {
            prev: 0.0,
            retention: retention.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn next_frame(&mut self, left: f32, right: f32) -> (f32, f32) {
        let l = one_pole(self.prev, left, self.retention);
        let r = one_pole(self.prev, right, self.retention);
        self.prev = (l + r) * 0.5;
        (l, r)
    }

    pub fn reset(&mut self) {
        self.prev = 0.0;
    }
}
