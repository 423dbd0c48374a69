// Colorschemes: flat RGBA lookup tables indexed by normalized heat.
use std::sync::OnceLock;

use image::Rgba;

use crate::error::{Error, Result};
use crate::gradient::{ColorStop, Gradient};

/// Number of levels in the default colorscheme (plus the transparent one).
pub const DEFAULT_COLORSCHEME_LEVELS: usize = 1024;

/// Keypoints of the default colorscheme: cool blue through pale yellow to a
/// warm red, rendered as [`Gradient::mixed_exp`].
pub const DEFAULT_GRADIENT: [ColorStop; 5] = [
    ColorStop::new(0.00, 50, 136, 189),
    ColorStop::new(0.25, 102, 194, 165),
    ColorStop::new(0.50, 230, 245, 152),
    ColorStop::new(0.75, 253, 174, 97),
    ColorStop::new(1.00, 213, 62, 79),
];

static DEFAULT_SCHEME: OnceLock<Colorscheme> = OnceLock::new();

/// An ordered table of colors. Entry 0 is what a cell without heat looks
/// like, the last entry is the hottest color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Colorscheme {
    colors: Vec<Rgba<u8>>,
}

impl Colorscheme {
    /// Build a table from packed RGBA bytes, four per color.
    pub fn from_rgba(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() || bytes.len() % 4 != 0 {
            return Err(Error::invalid(format!(
                "colorscheme needs a non-empty multiple of 4 bytes, got {}",
                bytes.len()
            )));
        }
        let colors = bytes
            .chunks_exact(4)
            .map(|c| Rgba([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(Self { colors })
    }

    pub(crate) fn from_colors(colors: Vec<Rgba<u8>>) -> Self {
        debug_assert!(!colors.is_empty());
        Self { colors }
    }

    /// The built-in heat colorscheme, baked once per process on first use.
    pub fn default_scheme() -> &'static Colorscheme {
        DEFAULT_SCHEME.get_or_init(|| {
            tracing::debug!(levels = DEFAULT_COLORSCHEME_LEVELS, "baking default colorscheme");
            Gradient::from_sorted(DEFAULT_GRADIENT.to_vec())
                .bake_mixed_exp(DEFAULT_COLORSCHEME_LEVELS)
        })
    }

    /// Transparent for zero heat, then 256 opaque grays from black to white.
    #[must_use]
    pub fn b2w() -> Self {
        let grays = (0..=255u8).map(|v| Rgba([v, v, v, 255]));
        Self::from_colors(std::iter::once(Rgba([0, 0, 0, 0])).chain(grays).collect())
    }

    /// Like [`b2w`](Self::b2w) but zero heat is opaque black.
    #[must_use]
    pub fn b2w_opaque() -> Self {
        let mut cs = Self::b2w();
        cs.colors[0] = Rgba([0, 0, 0, 255]);
        cs
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a colorscheme has at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn colors(&self) -> &[Rgba<u8>] {
        &self.colors
    }

    /// Table index for normalized heat `t`: the nearest of the evenly spaced
    /// entries, with `t` clamped into `[0, 1]` (NaN counts as 0).
    #[inline]
    #[must_use]
    pub fn index_of(&self, t: f32) -> usize {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let idx = ((self.colors.len() - 1) as f32 * t + 0.5) as usize;
        idx.min(self.colors.len() - 1)
    }

    /// Color for normalized heat `t`.
    #[inline]
    #[must_use]
    pub fn lookup(&self, t: f32) -> Rgba<u8> {
        self.colors[self.index_of(t)]
    }
}

impl Default for Colorscheme {
    fn default() -> Self {
        Self::default_scheme().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_rejects_ragged_input() {
        assert!(Colorscheme::from_rgba(&[]).is_err());
        assert!(Colorscheme::from_rgba(&[1, 2, 3]).is_err());
        let cs = Colorscheme::from_rgba(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(cs.colors(), &[Rgba([1, 2, 3, 4]), Rgba([5, 6, 7, 8])]);
    }

    #[test]
    fn b2w_lookup_levels() {
        let cs = Colorscheme::b2w();
        assert_eq!(cs.len(), 257);
        assert_eq!(cs.lookup(0.0), Rgba([0, 0, 0, 0]));
        assert_eq!(cs.lookup(0.5), Rgba([127, 127, 127, 255]));
        assert_eq!(cs.lookup(0.75), Rgba([191, 191, 191, 255]));
        assert_eq!(cs.lookup(1.0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn lookup_clamps_out_of_range() {
        let cs = Colorscheme::b2w_opaque();
        assert_eq!(cs.lookup(-1.0), Rgba([0, 0, 0, 255]));
        assert_eq!(cs.lookup(f32::NAN), Rgba([0, 0, 0, 255]));
        assert_eq!(cs.lookup(3.0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn single_entry_scheme() {
        let cs = Colorscheme::from_rgba(&[9, 9, 9, 9]).unwrap();
        assert_eq!(cs.index_of(0.0), 0);
        assert_eq!(cs.index_of(1.0), 0);
    }

    #[test]
    fn default_scheme_fixture() {
        let cs = Colorscheme::default_scheme();
        assert_eq!(cs.len(), DEFAULT_COLORSCHEME_LEVELS + 1);
        assert_eq!(cs.lookup(0.0), Rgba([0, 0, 0, 0]));
        // Opaque from 1% heat upwards.
        assert_eq!(cs.colors()[12].0[3], 255);
        let hot = cs.lookup(1.0);
        assert_eq!(hot.0[3], 255);
        // The hot end is red-dominated, the low end blue-dominated.
        assert!(hot.0[0] > hot.0[2]);
        let cool = cs.colors()[1];
        assert!(cool.0[2] > cool.0[0]);
        assert_eq!(&Colorscheme::default(), cs);
    }
}
