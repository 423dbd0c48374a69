// The renderer: normalizes accumulated heat and maps it through a
// colorscheme into RGBA pixels.
//
// Output is always `width * height * 4` bytes, R, G, B, A per pixel, row 0
// first, in the same row-major order as the heatmap itself. Rendering only
// reads the heatmap, so it can be repeated after more points are added.

use image::RgbaImage;

use crate::colorscheme::Colorscheme;
use crate::error::{Error, Result};
use crate::types::Heatmap;

impl Heatmap {
    /// Render with `colorscheme`, normalizing by the hottest cell.
    pub fn render(&self, colorscheme: &Colorscheme) -> Result<RgbaImage> {
        let mut img = self.blank_frame()?;
        self.colorize(colorscheme, self.saturation(), &mut img);
        Ok(img)
    }

    /// Render with [`Colorscheme::default_scheme`].
    pub fn render_default(&self) -> Result<RgbaImage> {
        self.render(Colorscheme::default_scheme())
    }

    /// Render into caller-provided storage of exactly `width * height * 4`
    /// bytes, normalizing by the hottest cell.
    pub fn render_to(&self, colorscheme: &Colorscheme, out: &mut [u8]) -> Result<()> {
        self.check_output(out)?;
        self.colorize(colorscheme, self.saturation(), out);
        Ok(())
    }

    /// Render with every value above `saturation` clamped to it, and
    /// `saturation` (instead of the hottest cell) mapped to the top color.
    pub fn render_saturated(&self, colorscheme: &Colorscheme, saturation: f32) -> Result<RgbaImage> {
        check_saturation(saturation)?;
        let mut img = self.blank_frame()?;
        self.colorize(colorscheme, saturation, &mut img);
        Ok(img)
    }

    /// [`render_saturated`](Self::render_saturated) into caller storage.
    pub fn render_saturated_to(
        &self,
        colorscheme: &Colorscheme,
        saturation: f32,
        out: &mut [u8],
    ) -> Result<()> {
        check_saturation(saturation)?;
        self.check_output(out)?;
        self.colorize(colorscheme, saturation, out);
        Ok(())
    }

    // An empty heatmap divides by 1, so every cell maps to t = 0.
    fn saturation(&self) -> f32 {
        if self.max > 0.0 { self.max } else { 1.0 }
    }

    // Frame storage follows the same allocation policy as the heatmap itself.
    fn blank_frame(&self) -> Result<RgbaImage> {
        let len = self.buf.len() * 4;
        let mut raw = Vec::new();
        raw.try_reserve_exact(len)
            .map_err(|_| Error::OutOfMemory { bytes: len })?;
        raw.resize(len, 0);
        RgbaImage::from_raw(self.width as u32, self.height as u32, raw).ok_or_else(|| {
            Error::invalid(format!("no {}x{} frame for the heatmap", self.width, self.height))
        })
    }

    fn check_output(&self, out: &[u8]) -> Result<()> {
        let expected = self.buf.len() * 4;
        if out.len() != expected {
            return Err(Error::invalid(format!(
                "output buffer has {} bytes, a {}x{} render needs {expected}",
                out.len(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    fn colorize(&self, colorscheme: &Colorscheme, saturation: f32, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.buf.len() * 4);
        tracing::trace!(
            width = self.width,
            height = self.height,
            max = self.max,
            saturation,
            "rendering heatmap"
        );

        let inv = saturation.recip();
        let row_bytes = self.width * 4;
        let paint_row = |(src, dst): (&[f32], &mut [u8])| {
            for (v, px) in src.iter().zip(dst.chunks_exact_mut(4)) {
                let t = v.min(saturation) * inv;
                px.copy_from_slice(&colorscheme.lookup(t).0);
            }
        };

        // Rows are independent: each reads one heatmap row and writes one
        // disjoint output row.
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.buf
                .par_chunks(self.width)
                .zip(out.par_chunks_mut(row_bytes))
                .for_each(paint_row);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.buf
                .chunks(self.width)
                .zip(out.chunks_mut(row_bytes))
                .for_each(paint_row);
        }
    }
}

fn check_saturation(saturation: f32) -> Result<()> {
    if !saturation.is_finite() || saturation <= 0.0 {
        return Err(Error::invalid(format!(
            "saturation must be finite and > 0, got {saturation}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stamp;

    #[rustfmt::skip]
    const CROSS: [f32; 9] = [
        0.0, 0.5, 0.0,
        0.5, 1.0, 0.5,
        0.0, 0.5, 0.0,
    ];

    // Gray level `g` as b2w renders it, or transparent for None.
    fn px(g: Option<u8>) -> [u8; 4] {
        match g {
            Some(g) => [g, g, g, 255],
            None => [0, 0, 0, 0],
        }
    }

    fn cross_image(edge: u8, center: u8) -> Vec<u8> {
        [None, Some(edge), None, Some(edge), Some(center), Some(edge), None, Some(edge), None]
            .into_iter()
            .flat_map(px)
            .collect()
    }

    #[test]
    fn empty_heatmap_renders_transparent() {
        let hm = Heatmap::new(3, 3).unwrap();
        let mut img = [1u8; 36];
        hm.render_to(&Colorscheme::b2w(), &mut img).unwrap();
        assert_eq!(img, [0u8; 36]);
    }

    #[test]
    fn single_cross_renders_gray_levels() {
        let mut hm = Heatmap::new(3, 3).unwrap();
        hm.add_point_with_stamp(1, 1, &Stamp::from_data(3, 3, &CROSS).unwrap());
        let img = hm.render(&Colorscheme::b2w()).unwrap();
        assert_eq!((img.width(), img.height()), (3, 3));
        assert_eq!(img.into_raw(), cross_image(127, 255));
    }

    #[test]
    fn normalization_hides_repeated_points() {
        let stamp = Stamp::from_data(3, 3, &CROSS).unwrap();
        let mut hm = Heatmap::new(3, 3).unwrap();
        hm.add_point_with_stamp(1, 1, &stamp);
        let mut once = vec![0u8; 36];
        hm.render_to(&Colorscheme::b2w(), &mut once).unwrap();

        hm.add_point_with_stamp(1, 1, &stamp);
        let mut twice = vec![0u8; 36];
        hm.render_to(&Colorscheme::b2w(), &mut twice).unwrap();

        assert_eq!(once, cross_image(127, 255));
        assert_eq!(once, twice);
    }

    #[test]
    fn saturation_clamps_and_rescales() {
        let stamp = Stamp::from_data(3, 3, &CROSS).unwrap();
        let mut hm = Heatmap::new(3, 3).unwrap();
        for _ in 0..3 {
            hm.add_point_with_stamp(1, 1, &stamp);
        }
        let cs = Colorscheme::b2w();
        let mut img = vec![0u8; 36];

        hm.render_saturated_to(&cs, 1.0, &mut img).unwrap();
        assert_eq!(img, cross_image(255, 255));

        hm.render_saturated_to(&cs, 2.0, &mut img).unwrap();
        assert_eq!(img, cross_image(191, 255));

        assert_eq!(hm.render_saturated(&cs, 2.0).unwrap().into_raw(), img);
    }

    #[test]
    fn bad_arguments_leave_output_untouched() {
        let mut hm = Heatmap::new(2, 2).unwrap();
        hm.add_point_with_stamp(0, 0, &Stamp::new(1).unwrap());
        let cs = Colorscheme::b2w();

        let mut short = [7u8; 15];
        assert!(matches!(hm.render_to(&cs, &mut short), Err(Error::InvalidArgument(_))));
        assert_eq!(short, [7u8; 15]);

        let mut ok = [7u8; 16];
        for sat in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(hm.render_saturated_to(&cs, sat, &mut ok).is_err());
            assert!(hm.render_saturated(&cs, sat).is_err());
        }
        assert_eq!(ok, [7u8; 16]);
    }

    #[test]
    fn allocated_frames_match_the_heatmap() {
        let hm = Heatmap::new(5, 3).unwrap();
        let frame = hm.blank_frame().unwrap();
        assert_eq!((frame.width(), frame.height()), (5, 3));
        assert!(frame.as_raw().iter().all(|&b| b == 0));

        let img = hm.render_saturated(&Colorscheme::b2w_opaque(), 1.0).unwrap();
        assert_eq!(img.as_raw().len(), 5 * 3 * 4);
    }

    #[test]
    fn rendering_is_repeatable() {
        let mut hm = Heatmap::new(64, 32).unwrap();
        hm.add_points([(3, 4), (40, 20), (41, 20), (63, 31)]);
        let a = hm.render_default().unwrap();
        let b = hm.render_default().unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
        assert_eq!(a.as_raw().len(), 64 * 32 * 4);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_rows_match_a_row_by_row_render() {
        let mut hm = Heatmap::new(97, 61).unwrap();
        hm.add_points((0..40).map(|i| ((i * 37) % 97, (i * 23) % 61)));
        let cs = Colorscheme::default_scheme();

        let inv = hm.max().recip();
        let mut expected = Vec::with_capacity(97 * 61 * 4);
        for y in 0..61 {
            for x in 0..97 {
                let v = hm.value_at(x, y).unwrap();
                expected.extend_from_slice(&cs.lookup(v.min(hm.max()) * inv).0);
            }
        }

        let mut out = vec![0u8; 97 * 61 * 4];
        hm.render_to(cs, &mut out).unwrap();
        assert_eq!(out, expected);
        assert_eq!(hm.render(cs).unwrap().into_raw(), expected);
    }
}
