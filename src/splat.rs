// The splatter: adds a stamp's weights into the heatmap around a point.
// Cells that land outside the heatmap are dropped; nothing wraps around.

use crate::types::{Heatmap, Stamp};

impl Heatmap {
    /// Splat the process-wide default stamp centered on `(x, y)`.
    pub fn add_point(&mut self, x: i32, y: i32) {
        self.add_point_with_stamp(x, y, Stamp::default_stamp());
    }

    /// Splat `stamp` so that its center cell lands on `(x, y)`.
    ///
    /// The point itself may lie outside the heatmap (even at negative
    /// coordinates); only the stamp cells that fall inside are added.
    pub fn add_point_with_stamp(&mut self, x: i32, y: i32, stamp: &Stamp) {
        let (cx, cy) = stamp.center();

        // Top-left corner of the stamp in heatmap coordinates. i64 so that
        // extreme points cannot overflow.
        let left = i64::from(x) - cx as i64;
        let top = i64::from(y) - cy as i64;

        // Visible window of the stamp, as [first, last) stamp columns/rows.
        let Some((sx0, sx1)) = clip_span(left, stamp.width(), self.width) else {
            return;
        };
        let Some((sy0, sy1)) = clip_span(top, stamp.height(), self.height) else {
            return;
        };

        let span = sx1 - sx0;
        let weights = stamp.weights();
        let mut max = self.max;
        for sy in sy0..sy1 {
            let hy = (top + sy as i64) as usize;
            let hx = (left + sx0 as i64) as usize;
            let dst = &mut self.buf[hy * self.width + hx..][..span];
            let src = &weights[sy * stamp.width() + sx0..][..span];
            for (cell, w) in dst.iter_mut().zip(src) {
                *cell += *w;
                if *cell > max {
                    max = *cell;
                }
            }
        }
        self.max = max;
    }

    /// Splat the default stamp at every point of `points`.
    pub fn add_points<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        self.add_points_with_stamp(points, Stamp::default_stamp());
    }

    /// Splat `stamp` at every point of `points`.
    pub fn add_points_with_stamp<I>(&mut self, points: I, stamp: &Stamp)
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        for (x, y) in points {
            self.add_point_with_stamp(x, y, stamp);
        }
    }
}

/// Which part `[first, last)` of a stamp span of `len` cells starting at
/// `start` overlaps `0..limit`. `None` if nothing does.
fn clip_span(start: i64, len: usize, limit: usize) -> Option<(usize, usize)> {
    let end = start + len as i64;
    let first = (-start).max(0);
    let last = (limit as i64 - start).min(len as i64);
    if end <= 0 || start >= limit as i64 || first >= last {
        return None;
    }
    Some((first as usize, last as usize))
}
