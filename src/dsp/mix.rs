//! Stereo summing of the loop's layers.

/*
Stereo Layer Mixing
===================

Mixing is addition. Each layer is scaled by a per-channel weight and summed:

    left  = pad + drone        + 0.6 · texture_l + gust
    right = pad + 0.98 · drone + 0.6 · texture_r - 0.2 · gust

Small asymmetries are what make the bed feel wide:

  drone   0.98 on the right: a barely-there level offset
  texture independent noise per side: fully decorrelated
  gust    full on the left, inverted and quieter on the right, so slow
          swells lean toward one side and pull back from the other

Nothing here prevents the sum from leaving [-1.0, 1.0]. The loop is
normalized as a whole after synthesis.
*/

/// One frame's worth of layer values before mixing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameLayers {
    pub pad: f32,
    pub drone: f32,
    pub texture_left: f32,
    pub texture_right: f32,
    pub gust: f32,
}

/// Per-channel weights applied when summing layers.
#[derive(Debug, Clone, Copy)]
pub struct StereoMix {
    pub drone_right: f32,
    pub texture: f32,
    pub gust_left: f32,
    pub gust_right: f32,
}

impl Default for StereoMix {
    fn default() -> Self {
        Self {
            drone_right: 0.98,
            texture: 0.6,
            gust_left: 1.0,
            gust_right: -0.2,
        }
    }
}

impl StereoMix {
    #[inline]
    pub fn mix(&self, layers: &FrameLayers) -> (f32, f32) {
        let left = layers.pad
            + layers.drone
            + self.texture * layers.texture_left
            + self.gust_left * layers.gust;
        let right = layers.pad
            + self.drone_right * layers.drone
            + self.texture * layers.texture_right
            + self.gust_right * layers.gust;
        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_is_centered() {
        let mix = StereoMix::default();
        let (l, r) = mix.mix(&FrameLayers {
            pad: 0.5,
            ..Default::default()
        });
        assert_eq!(l, 0.5);
        assert_eq!(r, 0.5);
    }

    #[test]
    fn test_drone_slightly_quieter_on_right() {
        let mix = StereoMix::default();
        let (l, r) = mix.mix(&FrameLayers {
            drone: 0.06,
            ..Default::default()
        });
        assert!((l - 0.06).abs() < 1e-7);
        assert!((r - 0.06 * 0.98).abs() < 1e-7);
    }

    #[test]
    fn test_gust_moves_opposite_on_right() {
        let mix = StereoMix::default();
        let (l, r) = mix.mix(&FrameLayers {
            gust: 0.1,
            ..Default::default()
        });
        assert!((l - 0.1).abs() < 1e-7);
        assert!((r + 0.02).abs() < 1e-7);
    }

    #[test]
    fn test_texture_channels_are_independent() {
        let mix = StereoMix::default();
        let (l, r) = mix.mix(&FrameLayers {
            texture_left: 1.0,
            texture_right: -0.5,
            ..Default::default()
        });
        assert!((l - 0.6).abs() < 1e-7);
        assert!((r + 0.3).abs() < 1e-7);
    }
}
