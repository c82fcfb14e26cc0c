//! Gain, peak normalization and quantization.

/*
Peak Normalization
==================

After synthesis the loop's level is arbitrary. Normalization scales every
sample by one constant so the loudest sample lands exactly on a target:

    gain = target / peak

A target below 1.0 leaves headroom. 0.85 ≈ -1.4 dBFS, enough that a player's
resampler or volume ramp won't push the loop into clipping.

A silent (or near-silent) buffer has a peak close to zero. Below
`SILENCE_FLOOR` the peak is treated as 1.0, so the buffer is scaled by the
target alone and never by infinity.


Quantization
------------

16-bit PCM stores integers in [-32768, 32767]. Samples are clamped to
[-1.0, 1.0] first, then `round(sample × 32767)`. Clamping before the cast
keeps float error at ±1.0 from wrapping around.
*/

/// Peaks below this are treated as silence.
pub const SILENCE_FLOOR: f32 = 1e-9;

/// Largest absolute sample value across all given channels.
pub fn peak(channels: &[&[f32]]) -> f32 {
    channels
        .iter()
        .flat_map(|channel| channel.iter())
        .fold(0.0f32, |acc, &x| acc.max(x.abs()))
}

/// Gain that brings `peak` to `target`, with the silence floor applied.
#[inline]
pub fn normalize_gain(peak: f32, target: f32) -> f32 {
    let peak = if peak < SILENCE_FLOOR { 1.0 } else { peak };
    target / peak
}

pub fn apply_gain(buffer: &mut [f32], gain: f32) {
    for sample in buffer.iter_mut() {
        *sample *= gain;
    }
}

/// Scale all channels together so their joint peak equals `target`.
///
/// Returns the gain that was applied.
pub fn normalize_to(channels: &mut [&mut [f32]], target: f32) -> f32 {
    let joint_peak = channels
        .iter()
        .flat_map(|channel| channel.iter())
        .fold(0.0f32, |acc, &x| acc.max(x.abs()));
    let gain = normalize_gain(joint_peak, target);

    for channel in channels.iter_mut() {
        apply_gain(channel, gain);
    }

    gain
}

/// Convert a float sample to 16-bit PCM (clamp, then round to nearest).
#[inline]
pub fn to_pcm_i16(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    (clamped * i16::MAX as f32).round() as i16
}
