// sRGB <-> linear light lookup tables, used to blend gradient keypoints.
use std::sync::OnceLock;

pub(crate) struct GammaLut {
    // sRGB(0..255) -> linear (0..1)
    srgb_to_linear: [f32; 256],
    // linear(0..1) -> sRGB(0..255), index = (linear * 4095).round()
    linear_to_srgb: [u8; 4096],
}

static SHARED: OnceLock<GammaLut> = OnceLock::new();

impl GammaLut {
    /// The process-wide tables, built on first use.
    pub(crate) fn shared() -> &'static GammaLut {
        SHARED.get_or_init(GammaLut::new)
    }

    fn new() -> Self {
        let mut s2l = [0.0f32; 256];
        for (v, out) in s2l.iter_mut().enumerate() {
            let c = v as f32 / 255.0;
            *out = if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) };
        }

        let mut l2s = [0u8; 4096];
        for (i, out) in l2s.iter_mut().enumerate() {
            let l = i as f32 / 4095.0;
            let s = if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 };
            *out = (s * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Self { srgb_to_linear: s2l, linear_to_srgb: l2s }
    }

    #[inline]
    pub(crate) fn to_linear(&self, v: u8) -> f32 {
        self.srgb_to_linear[v as usize]
    }

    #[inline]
    pub(crate) fn to_srgb(&self, l: f32) -> u8 {
        let idx = (l.clamp(0.0, 1.0) * 4095.0).round() as usize;
        self.linear_to_srgb[idx]
    }

    /// Blend two sRGB channel values at `t` in linear light.
    #[inline]
    pub(crate) fn mix(&self, a: u8, b: u8, t: f32) -> u8 {
        let (la, lb) = (self.to_linear(a), self.to_linear(b));
        self.to_srgb(la + (lb - la) * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_survive_a_round_trip() {
        let lut = GammaLut::shared();
        for v in [0u8, 1, 64, 128, 200, 255] {
            assert_eq!(lut.to_srgb(lut.to_linear(v)), v);
        }
    }

    #[test]
    fn linear_midpoint_is_brighter_than_srgb_midpoint() {
        let lut = GammaLut::shared();
        // Half the light of white is ~188 in sRGB, not 128.
        let mid = lut.mix(0, 255, 0.5);
        assert!((186..=189).contains(&mid), "{mid}");
        assert_eq!(lut.mix(10, 200, 0.0), 10);
        assert_eq!(lut.mix(10, 200, 1.0), 200);
    }
}
