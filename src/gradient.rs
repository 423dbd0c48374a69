// Gradients: sorted color keypoints, and the colorscheme tables baked from
// them.
//
// A `Gradient` is the editable description ("blue at 0, red at 1"); a
// `Colorscheme` is the flat lookup table the renderer indexes. All tables
// built here start with a fully transparent entry, so cells without any heat
// render as background.

use image::Rgba;

use crate::colorscheme::Colorscheme;
use crate::error::{Error, Result};
use crate::gamma::GammaLut;

/// One keypoint of a gradient: an sRGB color at position `pos` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStop {
    pub pos: f32,
    pub color: [u8; 3],
}

impl ColorStop {
    pub const fn new(pos: f32, r: u8, g: u8, b: u8) -> Self {
        Self { pos, color: [r, g, b] }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex color.
    pub fn from_hex(pos: f32, hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::invalid(format!("invalid color: {hex:?}")));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| Error::invalid(format!("invalid color {hex:?}: {e}")))
        };
        Ok(Self { pos, color: [channel(0)?, channel(2)?, channel(4)?] })
    }
}

/// Keypoints sorted by position, the first at 0 and the last at 1.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<ColorStop>", into = "Vec<ColorStop>")
)]
pub struct Gradient {
    stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn new(stops: Vec<ColorStop>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(Error::invalid("a gradient needs at least two keypoints"));
        }
        if let Some(s) = stops.iter().find(|s| !(0.0..=1.0).contains(&s.pos)) {
            return Err(Error::invalid(format!(
                "keypoint position {} must lie within 0.0 and 1.0",
                s.pos
            )));
        }
        if stops.windows(2).any(|p| p[1].pos < p[0].pos) {
            return Err(Error::invalid("keypoints must be sorted by position"));
        }
        let (first, last) = (stops[0].pos, stops[stops.len() - 1].pos);
        if first != 0.0 || last != 1.0 {
            return Err(Error::invalid(format!(
                "keypoints must span 0.0 to 1.0, got {first} to {last}"
            )));
        }
        Ok(Self { stops })
    }

    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at `t`, blended in linear light between the two surrounding
    /// keypoints. `t` outside `[0, 1]` gets the nearest end color.
    #[must_use]
    pub fn color_at(&self, t: f32) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let lut = GammaLut::shared();
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.pos <= t && t <= b.pos {
                let span = b.pos - a.pos;
                if span <= 0.0 {
                    return a.color;
                }
                let local = (t - a.pos) / span;
                return [
                    lut.mix(a.color[0], b.color[0], local),
                    lut.mix(a.color[1], b.color[1], local),
                    lut.mix(a.color[2], b.color[2], local),
                ];
            }
        }
        self.stops[self.stops.len() - 1].color
    }

    /// Color of the keypoint closest to `t`.
    #[must_use]
    pub fn nearest(&self, t: f32) -> [u8; 3] {
        for pair in self.stops.windows(2) {
            if t < (pair[0].pos + pair[1].pos) * 0.5 {
                return pair[0].color;
            }
        }
        self.stops[self.stops.len() - 1].color
    }

    /// One opaque entry per keypoint, no blending at all.
    #[must_use]
    pub fn discrete(&self) -> Colorscheme {
        let colors = std::iter::once(TRANSPARENT)
            .chain(self.stops.iter().map(|s| opaque(s.color)))
            .collect();
        Colorscheme::from_colors(colors)
    }

    /// A smooth ramp of `levels` entries along the keypoints. The alpha
    /// channel ramps up over the lowest 1/30 of the range.
    pub fn soft(&self, levels: usize) -> Result<Colorscheme> {
        self.table(levels, Self::soft_entry)
    }

    /// Like [`soft`](Self::soft), with a 20% tint of the nearest keypoint
    /// for a stair-stepped look. Pretty in most cases.
    pub fn mixed(&self, levels: usize) -> Result<Colorscheme> {
        self.table(levels, Self::mixed_entry)
    }

    /// [`mixed`](Self::mixed) through `1 - (1-t)^10`, which spreads the
    /// colors over the low end. Use it when the maximum is very spiked.
    pub fn mixed_exp(&self, levels: usize) -> Result<Colorscheme> {
        self.table(levels, Self::mixed_exp_entry)
    }

    /// Keypoints known to be valid, e.g. a built-in constant.
    pub(crate) fn from_sorted(stops: Vec<ColorStop>) -> Self {
        debug_assert!(Gradient::new(stops.clone()).is_ok());
        Self { stops }
    }

    pub(crate) fn bake_mixed(&self, levels: usize) -> Colorscheme {
        self.bake(levels, Self::mixed_entry)
    }

    pub(crate) fn bake_mixed_exp(&self, levels: usize) -> Colorscheme {
        self.bake(levels, Self::mixed_exp_entry)
    }

    fn soft_entry(&self, t: f32) -> ([u8; 3], u8) {
        (self.color_at(t), ramp_alpha(t, 30.0))
    }

    fn mixed_entry(&self, t: f32) -> ([u8; 3], u8) {
        (self.mixed_color(t), ramp_alpha(t, 30.0))
    }

    fn mixed_exp_entry(&self, t: f32) -> ([u8; 3], u8) {
        let alpha = ramp_alpha(t, 100.0);
        let u = 1.0 - (1.0 - t).powi(10);
        (self.mixed_color(u), alpha)
    }

    fn mixed_color(&self, t: f32) -> [u8; 3] {
        let soft = self.color_at(t);
        let step = self.nearest(t);
        // Plain sRGB lerp, the tint is a stylistic overlay.
        std::array::from_fn(|i| lerp_u8(soft[i], step[i], 0.2))
    }

    fn table(&self, levels: usize, entry: Entry) -> Result<Colorscheme> {
        if levels == 0 {
            return Err(Error::invalid("a colorscheme needs at least one level"));
        }
        let len = levels
            .checked_add(1)
            .ok_or_else(|| Error::invalid(format!("{levels} levels is too many")))?;
        let mut colors = Vec::new();
        colors
            .try_reserve_exact(len)
            .map_err(|_| Error::OutOfMemory { bytes: len.saturating_mul(4) })?;
        Ok(self.bake_into(colors, levels, entry))
    }

    fn bake(&self, levels: usize, entry: Entry) -> Colorscheme {
        self.bake_into(Vec::with_capacity(levels + 1), levels, entry)
    }

    fn bake_into(&self, mut colors: Vec<Rgba<u8>>, levels: usize, entry: Entry) -> Colorscheme {
        colors.push(TRANSPARENT);
        for y in 0..levels {
            let t = y as f32 / levels as f32;
            let ([r, g, b], a) = entry(self, t);
            colors.push(Rgba([r, g, b, a]));
        }
        tracing::debug!(stops = self.stops.len(), levels, "baked colorscheme");
        Colorscheme::from_colors(colors)
    }
}

type Entry = fn(&Gradient, f32) -> ([u8; 3], u8);

impl TryFrom<Vec<ColorStop>> for Gradient {
    type Error = Error;

    fn try_from(stops: Vec<ColorStop>) -> Result<Self> {
        Gradient::new(stops)
    }
}

impl From<Gradient> for Vec<ColorStop> {
    fn from(g: Gradient) -> Self {
        g.stops
    }
}

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn opaque([r, g, b]: [u8; 3]) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

fn ramp_alpha(t: f32, steepness: f32) -> u8 {
    ((t * steepness).min(1.0) * 255.0) as u8
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}
