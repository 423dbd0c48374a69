// Stamp factory: round stamps with the built-in falloff, round stamps with a
// caller-supplied falloff, and the process-wide default stamp used by
// `Heatmap::add_point`.
use std::sync::OnceLock;

use crate::error::{Error, Result, try_zeroed};
use crate::types::Stamp;

/// Radius of the stamp `Heatmap::add_point` splats: a 31x31 kernel.
pub const DEFAULT_STAMP_RADIUS: usize = 15;

static DEFAULT_STAMP: OnceLock<Stamp> = OnceLock::new();

impl Stamp {
    /// Round stamp of side `2r+1` with a linear falloff.
    ///
    /// The weight at distance `d` from the center is `1 - d/(r+1)` inside the
    /// inscribed circle (`d <= r`) and exactly 0 outside it, so the center
    /// holds the peak weight 1 and corners do not bleed past the radius.
    pub fn new(radius: usize) -> Result<Self> {
        Self::nonlinear(radius, |d| d)
    }

    /// Round stamp of side `2r+1` shaped by `distshape`.
    ///
    /// `distshape` gets the distance to the center normalized by `r+1`, so
    /// its input lies in `[0, 1)` inside the circle, and returns a shaped
    /// distance. The weight is `1 - distshape(d)` clamped into `[0, 1]`:
    /// `|d| d * d` gives a fat stamp, `|d| d.sqrt()` a pointy one.
    /// Cells outside the inscribed circle stay 0 and never call `distshape`.
    pub fn nonlinear<F>(radius: usize, distshape: F) -> Result<Self>
    where
        F: Fn(f32) -> f32,
    {
        if radius == 0 {
            return Err(Error::invalid("stamp radius must be > 0"));
        }
        let d = radius
            .checked_mul(2)
            .and_then(|v| v.checked_add(1))
            .ok_or_else(|| Error::invalid(format!("stamp radius {radius} too large")))?;
        let len = d
            .checked_mul(d)
            .ok_or_else(|| Error::invalid(format!("stamp radius {radius} too large")))?;

        let mut weights = try_zeroed(len)?;
        fill_round(&mut weights, radius, distshape);

        tracing::debug!(radius, side = d, "generated round stamp");
        Ok(Stamp::from_weights(d, d, weights))
    }

    /// The stamp `Heatmap::add_point` uses: radius [`DEFAULT_STAMP_RADIUS`]
    /// with the default falloff.
    ///
    /// Built on first use, then shared by every heatmap in the process until
    /// it exits.
    pub fn default_stamp() -> &'static Stamp {
        DEFAULT_STAMP.get_or_init(|| {
            tracing::debug!(radius = DEFAULT_STAMP_RADIUS, "initializing default stamp");
            Stamp::round_unchecked(DEFAULT_STAMP_RADIUS)
        })
    }

    // `new` for a radius known to be small and valid.
    fn round_unchecked(radius: usize) -> Stamp {
        let d = 2 * radius + 1;
        let mut weights = vec![0.0; d * d];
        fill_round(&mut weights, radius, |dist| dist);
        Stamp::from_weights(d, d, weights)
    }
}

/// Write the round kernel of `radius` into the zeroed `(2r+1)²` buffer.
fn fill_round<F>(weights: &mut [f32], radius: usize, distshape: F)
where
    F: Fn(f32) -> f32,
{
    let d = 2 * radius + 1;
    let norm = radius as f32 + 1.0;

    // Integer offsets keep the circle test exact: cells with dx²+dy² > r²
    // lie outside the disc no matter how the float sqrt rounds.
    let r2 = (radius as u64) * (radius as u64);
    for (y, row) in weights.chunks_exact_mut(d).enumerate() {
        let dy = y.abs_diff(radius) as u64;
        for (x, w) in row.iter_mut().enumerate() {
            let dx = x.abs_diff(radius) as u64;
            let dist2 = dx * dx + dy * dy;
            if dist2 > r2 {
                continue;
            }
            let shaped = distshape((dist2 as f32).sqrt() / norm);
            // NaN from a misbehaving callback counts as "no ink".
            let clamped = if shaped.is_nan() { 1.0 } else { shaped.clamp(0.0, 1.0) };
            *w = 1.0 - clamped;
        }
    }
}
