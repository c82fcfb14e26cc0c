//! Low Frequency Oscillator (LFO) helpers.

use std::f64::consts::TAU;

/*
Low Frequency Oscillators
=========================

An LFO is an oscillator running below hearing (~0.01 Hz to ~20 Hz). It does
not make sound; it moves a parameter over time.

Vocabulary
----------

  bipolar         Output swings -1.0 to +1.0.

  range mapping   Rescaling a bipolar signal onto [min, max]:
                      mid   = (min + max) / 2
                      depth = (max - min) / 2
                      out   = mid + depth · bipolar

  phase drift     Adding a second, much slower sinusoid to the phase of the
                  first. The LFO never repeats exactly, so the "breath" of a
                  long ambient bed doesn't feel mechanical.


The Breathing LFO
-----------------

The pad's amplitude follows

    lfo(t) = 0.6 + 0.4 · sin(2π · 0.03 · t + sin(0.001 · t))

    0.03 Hz  → one breath every ~33 seconds
    0.001    → drift term in rad/s (a period of ~104 minutes, so over a
               three-minute loop it only bends the phase slightly)
    range    → [0.2, 1.0]; the pad never fully disappears
*/

/// Map a bipolar value (-1.0 to +1.0) onto `[min, max]`.
///
/// # Example
/// ```
/// use mirror_ambient::dsp::lfo::bipolar_to_range;
/// assert!((bipolar_to_range(-1.0, 0.2, 1.0) - 0.2).abs() < 1e-12);
/// assert!((bipolar_to_range(1.0, 0.2, 1.0) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn bipolar_to_range(bipolar: f64, min: f64, max: f64) -> f64 {
    let mid = (min + max) * 0.5;
    let depth = (max - min) * 0.5;
    mid + depth * bipolar
}

/// Slow sine LFO with phase drift, rescaled to a fixed amplitude range.
#[derive(Debug, Clone, Copy)]
pub struct BreathingLfo {
    pub rate_hz: f64,
    /// Angular rate of the phase-drift sinusoid, in rad/s.
    pub drift_rate: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for BreathingLfo {
    fn default() -> Self {
        Self {
            rate_hz: 0.03,
            drift_rate: 0.001,
            min: 0.2,
            max: 1.0,
        }
    }
}

impl BreathingLfo {
    #[inline]
    pub fn value_at(&self, t: f64) -> f64 {
        let bipolar = (TAU * self.rate_hz * t + (t * self.drift_rate).sin()).sin();
        bipolar_to_range(bipolar, self.min, self.max)
    }
}
