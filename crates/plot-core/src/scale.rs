// File: crates/plot-core/src/scale.rs
// Summary: Linear data-to-pixel transform used by every plot kind.

use crate::range::DataRange;

/// Maps a data range onto `extent` pixels along one axis.
/// Pixel indices are the floor of the continuous position.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    bounds: DataRange,
    norm: DataRange,
    extent: u32,
}

impl LinearScale {
    pub fn new(range: DataRange, extent: u32) -> Self {
        Self { bounds: range, norm: range.normalized(), extent }
    }

    /// Continuous pixel offset of `v` from the low edge.
    #[inline]
    pub fn offset(&self, v: f64) -> f64 {
        self.norm.position(v, self.extent as f64)
    }

    /// Pixel index of `v`. The upper bound lands on the last pixel; values outside
    /// the range are clipped, a degenerate range admitting only its own value.
    pub fn to_px(&self, v: f64) -> Option<u32> {
        if self.extent == 0 || v < self.bounds.min || v > self.bounds.max {
            return None;
        }
        let px = self.offset(v).floor();
        Some((px as u32).min(self.extent - 1))
    }
}
