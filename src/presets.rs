// Named gradients: the ColorBrewer palettes, keypoints evenly spaced over
// [0, 1]. Sequential palettes run light to dark, diverging ones in their
// published order.
use std::fmt;
use std::str::FromStr;

use crate::colorscheme::{Colorscheme, DEFAULT_COLORSCHEME_LEVELS};
use crate::error::{Error, Result};
use crate::gradient::{ColorStop, Gradient};

/// A built-in named gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Blues,
    BrBG,
    BuGn,
    BuPu,
    GnBu,
    Greens,
    Greys,
    Oranges,
    OrRd,
    PiYG,
    PRGn,
    PuBuGn,
    PuBu,
    PuOr,
    PuRd,
    Purples,
    RdBu,
    RdGy,
    RdPu,
    RdYlBu,
    RdYlGn,
    Reds,
    Spectral,
    YlGnBu,
    YlGn,
    YlOrBr,
    YlOrRd,
}

impl Preset {
    pub const ALL: &[Preset] = &[
        Self::Blues,
        Self::BrBG,
        Self::BuGn,
        Self::BuPu,
        Self::GnBu,
        Self::Greens,
        Self::Greys,
        Self::Oranges,
        Self::OrRd,
        Self::PiYG,
        Self::PRGn,
        Self::PuBuGn,
        Self::PuBu,
        Self::PuOr,
        Self::PuRd,
        Self::Purples,
        Self::RdBu,
        Self::RdGy,
        Self::RdPu,
        Self::RdYlBu,
        Self::RdYlGn,
        Self::Reds,
        Self::Spectral,
        Self::YlGnBu,
        Self::YlGn,
        Self::YlOrBr,
        Self::YlOrRd,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Blues => "Blues",
            Self::BrBG => "BrBG",
            Self::BuGn => "BuGn",
            Self::BuPu => "BuPu",
            Self::GnBu => "GnBu",
            Self::Greens => "Greens",
            Self::Greys => "Greys",
            Self::Oranges => "Oranges",
            Self::OrRd => "OrRd",
            Self::PiYG => "PiYG",
            Self::PRGn => "PRGn",
            Self::PuBuGn => "PuBuGn",
            Self::PuBu => "PuBu",
            Self::PuOr => "PuOr",
            Self::PuRd => "PuRd",
            Self::Purples => "Purples",
            Self::RdBu => "RdBu",
            Self::RdGy => "RdGy",
            Self::RdPu => "RdPu",
            Self::RdYlBu => "RdYlBu",
            Self::RdYlGn => "RdYlGn",
            Self::Reds => "Reds",
            Self::Spectral => "Spectral",
            Self::YlGnBu => "YlGnBu",
            Self::YlGn => "YlGn",
            Self::YlOrBr => "YlOrBr",
            Self::YlOrRd => "YlOrRd",
        }
    }

    /// The keypoints of this palette.
    pub fn stops(&self) -> &'static [ColorStop] {
        match self {
            Self::Blues => &BLUES,
            Self::BrBG => &BRBG,
            Self::BuGn => &BUGN,
            Self::BuPu => &BUPU,
            Self::GnBu => &GNBU,
            Self::Greens => &GREENS,
            Self::Greys => &GREYS,
            Self::Oranges => &ORANGES,
            Self::OrRd => &ORRD,
            Self::PiYG => &PIYG,
            Self::PRGn => &PRGN,
            Self::PuBuGn => &PUBUGN,
            Self::PuBu => &PUBU,
            Self::PuOr => &PUOR,
            Self::PuRd => &PURD,
            Self::Purples => &PURPLES,
            Self::RdBu => &RDBU,
            Self::RdGy => &RDGY,
            Self::RdPu => &RDPU,
            Self::RdYlBu => &RDYLBU,
            Self::RdYlGn => &RDYLGN,
            Self::Reds => &REDS,
            Self::Spectral => &SPECTRAL,
            Self::YlGnBu => &YLGNBU,
            Self::YlGn => &YLGN,
            Self::YlOrBr => &YLORBR,
            Self::YlOrRd => &YLORRD,
        }
    }

    #[must_use]
    pub fn gradient(&self) -> Gradient {
        Gradient::from_sorted(self.stops().to_vec())
    }

    /// The `mixed` table at the default level count, the usual pick for a
    /// named palette.
    #[must_use]
    pub fn colorscheme(&self) -> Colorscheme {
        self.gradient().bake_mixed(DEFAULT_COLORSCHEME_LEVELS)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    /// Case-insensitive, so `"spectral"` and `"Spectral"` both work.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid(format!("unknown colorscheme preset {s:?}")))
    }
}

// Spread packed 0xRRGGBB colors evenly over [0, 1].
const fn evenly<const N: usize>(colors: [u32; N]) -> [ColorStop; N] {
    let mut stops = [ColorStop::new(0.0, 0, 0, 0); N];
    let mut i = 0;
    while i < N {
        let c = colors[i];
        let pos = if i + 1 == N { 1.0 } else { i as f32 / (N - 1) as f32 };
        stops[i] = ColorStop::new(pos, (c >> 16) as u8, (c >> 8) as u8, c as u8);
        i += 1;
    }
    stops
}

// ─── Sequential, 9 classes ──────────────────────────────────────────────

pub const BLUES: [ColorStop; 9] = evenly([
    0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c, 0x08306b,
]);
pub const BUGN: [ColorStop; 9] = evenly([
    0xf7fcfd, 0xe5f5f9, 0xccece6, 0x99d8c9, 0x66c2a4, 0x41ae76, 0x238b45, 0x006d2c, 0x00441b,
]);
pub const BUPU: [ColorStop; 9] = evenly([
    0xf7fcfd, 0xe0ecf4, 0xbfd3e6, 0x9ebcda, 0x8c96c6, 0x8c6bb1, 0x88419d, 0x810f7c, 0x4d004b,
]);
pub const GNBU: [ColorStop; 9] = evenly([
    0xf7fcf0, 0xe0f3db, 0xccebc5, 0xa8ddb5, 0x7bccc4, 0x4eb3d3, 0x2b8cbe, 0x0868ac, 0x084081,
]);
pub const GREENS: [ColorStop; 9] = evenly([
    0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x006d2c, 0x00441b,
]);
pub const GREYS: [ColorStop; 9] = evenly([
    0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000,
]);
pub const ORANGES: [ColorStop; 9] = evenly([
    0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801, 0xa63603, 0x7f2704,
]);
pub const ORRD: [ColorStop; 9] = evenly([
    0xfff7ec, 0xfee8c8, 0xfdd49e, 0xfdbb84, 0xfc8d59, 0xef6548, 0xd7301f, 0xb30000, 0x7f0000,
]);
pub const PUBU: [ColorStop; 9] = evenly([
    0xfff7fb, 0xece7f2, 0xd0d1e6, 0xa6bddb, 0x74a9cf, 0x3690c0, 0x0570b0, 0x045a8d, 0x023858,
]);
pub const PUBUGN: [ColorStop; 9] = evenly([
    0xfff7fb, 0xece2f0, 0xd0d1e6, 0xa6bddb, 0x67a9cf, 0x3690c0, 0x02818a, 0x016c59, 0x014636,
]);
pub const PURD: [ColorStop; 9] = evenly([
    0xf7f4f9, 0xe7e1ef, 0xd4b9da, 0xc994c7, 0xdf65b0, 0xe7298a, 0xce1256, 0x980043, 0x67001f,
]);
pub const PURPLES: [ColorStop; 9] = evenly([
    0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3, 0x54278f, 0x3f007d,
]);
pub const RDPU: [ColorStop; 9] = evenly([
    0xfff7f3, 0xfde0dd, 0xfcc5c0, 0xfa9fb5, 0xf768a1, 0xdd3497, 0xae017e, 0x7a0177, 0x49006a,
]);
pub const REDS: [ColorStop; 9] = evenly([
    0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0xa50f15, 0x67000d,
]);
pub const YLGN: [ColorStop; 9] = evenly([
    0xffffe5, 0xf7fcb9, 0xd9f0a3, 0xaddd8e, 0x78c679, 0x41ab5d, 0x238443, 0x006837, 0x004529,
]);
pub const YLGNBU: [ColorStop; 9] = evenly([
    0xffffd9, 0xedf8b1, 0xc7e9b4, 0x7fcdbb, 0x41b6c4, 0x1d91c0, 0x225ea8, 0x253494, 0x081d58,
]);
pub const YLORBR: [ColorStop; 9] = evenly([
    0xffffe5, 0xfff7bc, 0xfee391, 0xfec44f, 0xfe9929, 0xec7014, 0xcc4c02, 0x993404, 0x662506,
]);
pub const YLORRD: [ColorStop; 9] = evenly([
    0xffffcc, 0xffeda0, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xfc4e2a, 0xe31a1c, 0xbd0026, 0x800026,
]);

// ─── Diverging, 11 classes ──────────────────────────────────────────────

pub const BRBG: [ColorStop; 11] = evenly([
    0x543005, 0x8c510a, 0xbf812d, 0xdfc27d, 0xf6e8c3, 0xf5f5f5, 0xc7eae5, 0x80cdc1, 0x35978f,
    0x01665e, 0x003c30,
]);
pub const PIYG: [ColorStop; 11] = evenly([
    0x8e0152, 0xc51b7d, 0xde77ae, 0xf1b6da, 0xfde0ef, 0xf7f7f7, 0xe6f5d0, 0xb8e186, 0x7fbc41,
    0x4d9221, 0x276419,
]);
pub const PRGN: [ColorStop; 11] = evenly([
    0x40004b, 0x762a83, 0x9970ab, 0xc2a5cf, 0xe7d4e8, 0xf7f7f7, 0xd9f0d3, 0xa6dba0, 0x5aae61,
    0x1b7837, 0x00441b,
]);
pub const PUOR: [ColorStop; 11] = evenly([
    0x7f3b08, 0xb35806, 0xe08214, 0xfdb863, 0xfee0b6, 0xf7f7f7, 0xd8daeb, 0xb2abd2, 0x8073ac,
    0x542788, 0x2d004b,
]);
pub const RDBU: [ColorStop; 11] = evenly([
    0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7, 0xd1e5f0, 0x92c5de, 0x4393c3,
    0x2166ac, 0x053061,
]);
pub const RDGY: [ColorStop; 11] = evenly([
    0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xffffff, 0xe0e0e0, 0xbababa, 0x878787,
    0x4d4d4d, 0x1a1a1a,
]);
pub const RDYLBU: [ColorStop; 11] = evenly([
    0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee090, 0xffffbf, 0xe0f3f8, 0xabd9e9, 0x74add1,
    0x4575b4, 0x313695,
]);
pub const RDYLGN: [ColorStop; 11] = evenly([
    0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xd9ef8b, 0xa6d96a, 0x66bd63,
    0x1a9850, 0x006837,
]);
pub const SPECTRAL: [ColorStop; 11] = evenly([
    0x9e0142, 0xd53e4f, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xe6f598, 0xabdda4, 0x66c2a5,
    0x3288bd, 0x5e4fa2,
]);
