// Core types shared by the stamp factory, the splatter and the renderer.

use crate::error::{Error, Result, try_zeroed};

/// A small row-major weight kernel; the "ink" one point leaves behind.
///
/// The center cell is `(width / 2, height / 2)` with floor division, so a
/// stamp with an even side is anchored one cell right/below the true middle.
/// Weights are finite and never negative.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp {
    width: usize,
    height: usize,
    weights: Vec<f32>, // length = width * height
}

impl Stamp {
    /// Load a stamp from raw, row-major weights, taken verbatim.
    ///
    /// ```
    /// # use heatmap::Stamp;
    /// let plus = Stamp::from_data(3, 3, &[
    ///     0.0, 0.5, 0.0,
    ///     0.5, 1.0, 0.5,
    ///     0.0, 0.5, 0.0,
    /// ]).unwrap();
    /// assert_eq!(plus.center(), (1, 1));
    /// ```
    pub fn from_data(width: usize, height: usize, data: &[f32]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid(format!(
                "stamp dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = width.checked_mul(height).ok_or_else(|| {
            Error::invalid(format!("stamp dimensions {width}x{height} overflow"))
        })?;
        if data.len() != expected {
            return Err(Error::invalid(format!(
                "stamp data has {} values, {width}x{height} needs {expected}",
                data.len()
            )));
        }
        if let Some(i) = data.iter().position(|w| !w.is_finite() || *w < 0.0) {
            return Err(Error::invalid(format!(
                "stamp weight #{i} is {}, weights must be finite and >= 0",
                data[i]
            )));
        }

        let mut weights = try_zeroed(expected)?;
        weights.copy_from_slice(data);
        Ok(Self::from_weights(width, height, weights))
    }

    /// Trusted constructor for weights the factory produced itself.
    pub(crate) fn from_weights(width: usize, height: usize, weights: Vec<f32>) -> Self {
        debug_assert_eq!(weights.len(), width * height);
        Self { width, height, weights }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell that lands on the splat coordinate.
    #[must_use]
    pub fn center(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    #[must_use]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Weight at stamp cell `(x, y)`.
    ///
    /// # Panics
    /// Panics if the cell is outside the stamp.
    #[must_use]
    pub fn weight_at(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside stamp");
        self.weights[y * self.width + x]
    }

    /// Sum of all weights, i.e. the total ink of one unclipped splat.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.weights.iter().sum()
    }
}

/// The accumulation buffer: a fixed-size grid of summed, unnormalized heat.
///
/// Cells start at zero and only ever grow, because splatting adds
/// non-negative weights. The running maximum is kept alongside so
/// rendering does not need an extra pass.
#[derive(Clone, Debug)]
pub struct Heatmap {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) buf: Vec<f32>, // length = width * height, row-major
    pub(crate) max: f32,
}

impl Heatmap {
    /// Create an empty (all-zero) heatmap of `width` x `height` cells.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid(format!(
                "heatmap dimensions must be positive, got {width}x{height}"
            )));
        }
        // Rendered frames are `image` buffers, which count pixels in u32.
        if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
            return Err(Error::invalid(format!(
                "heatmap dimensions {width}x{height} exceed the u32 image range"
            )));
        }
        let len = width.checked_mul(height).ok_or_else(|| {
            Error::invalid(format!("heatmap dimensions {width}x{height} overflow"))
        })?;

        let buf = try_zeroed(len)?;
        tracing::debug!(width, height, "created heatmap");
        Ok(Self { width, height, buf, max: 0.0 })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Largest accumulated value so far; 0 for an untouched heatmap.
    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// All cells, row-major.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.buf
    }

    /// Accumulated value at `(x, y)`, or `None` outside the heatmap.
    #[must_use]
    pub fn value_at(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.buf[y * self.width + x])
        } else {
            None
        }
    }
}
