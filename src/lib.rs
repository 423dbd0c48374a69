//! # heatmap
//!
//! Fast heatmaps on the CPU: splat weighted *stamps* into an accumulation
//! buffer, then map the normalized result through a colorscheme into RGBA.
//!
//! ```
//! use heatmap::{Colorscheme, Heatmap, Stamp};
//!
//! let mut hm = Heatmap::new(256, 512)?;
//!
//! // The default stamp (radius 15)...
//! hm.add_point(128, 256);
//! // ...or any stamp you like, reused as often as you want.
//! let fat = Stamp::nonlinear(8, |d| d * d)?;
//! hm.add_point_with_stamp(20, 30, &fat);
//!
//! let img = hm.render(Colorscheme::default_scheme())?;
//! assert_eq!(img.as_raw().len(), 256 * 512 * 4);
//! # Ok::<(), heatmap::Error>(())
//! ```
//!
//! Objects are released by dropping them. The radius-15 default stamp and
//! the default colorscheme are built lazily, once per process.
//!
//! Named ColorBrewer palettes are available as [`Preset`]s, e.g.
//! `"Spectral".parse::<Preset>()?.colorscheme()`.
//!
//! ## Features
//!
//! - `parallel`: color output rows in parallel with rayon.
//! - `serde`: (de)serialize [`Gradient`]s and [`ColorStop`]s, validated on
//!   the way in.

mod colorscheme;
mod error;
mod gamma;
mod gradient;
mod presets;
mod render;
mod splat;
mod stamp;
mod types;

pub use colorscheme::{Colorscheme, DEFAULT_COLORSCHEME_LEVELS, DEFAULT_GRADIENT};
pub use error::{Error, Result};
pub use gradient::{ColorStop, Gradient};
pub use presets::Preset;
pub use stamp::DEFAULT_STAMP_RADIUS;
pub use types::{Heatmap, Stamp};

// Callers get the pixel types without a direct `image` dependency.
pub use image::{Rgba, RgbaImage};
