// File: crates/plot-core/src/range.rs
// Summary: Data range computation, explicit-bound resolution and the degenerate-range policy.

use crate::error::{PlotError, Result};

/// Closed interval `[min, max]` of data values.
/// Contract: both bounds are finite and `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataRange {
    pub min: f64,
    pub max: f64,
}

impl DataRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(PlotError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// True minimum and maximum of `samples`, in a single pass.
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(PlotError::EmptyData);
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (index, &v) in samples.iter().enumerate() {
            if !v.is_finite() {
                return Err(PlotError::NonFiniteSample { index, value: v });
            }
            min = min.min(v);
            max = max.max(v);
        }
        Ok(Self { min, max })
    }

    /// Range used for a render: explicit bounds win, missing ones come from the data.
    /// The samples are always validated, even when both bounds are given.
    pub fn resolve(samples: &[f64], min: Option<f64>, max: Option<f64>) -> Result<Self> {
        let data = Self::from_samples(samples)?;
        Self::new(min.unwrap_or(data.min), max.unwrap_or(data.max))
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// `max - min`; `+inf` when the bounds are more than `f64::MAX` apart.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `v` on an axis `scale` units long, `scale * (v - min) / span`.
    /// `v` is expected inside the range and the span to be nonzero.
    pub fn position(&self, v: f64, scale: f64) -> f64 {
        let span = self.span();
        if !span.is_finite() {
            // Halved operands cannot overflow.
            return scale * ((v / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0));
        }
        let scaled = scale * (v - self.min);
        if scaled.is_finite() { scaled / span } else { (v - self.min) / span * scale }
    }

    /// Left edge of step `i` when the range is cut into `count` equal steps.
    pub fn step(&self, i: usize, count: usize) -> f64 {
        let span = self.span();
        if span.is_finite() {
            self.min + span * i as f64 / count as f64
        } else {
            let t = i as f64 / count as f64;
            self.min * (1.0 - t) + self.max * t
        }
    }

    /// Interval used for pixel mapping and binning. A degenerate range becomes a unit
    /// interval centered on its value so every division stays finite.
    pub fn normalized(&self) -> Self {
        if !self.is_degenerate() {
            return *self;
        }
        // At large magnitudes 0.5 is below one ulp; widen to keep a nonzero span.
        let half = 0.5_f64.max(self.min.abs() * f64::EPSILON);
        Self { min: self.min - half, max: self.max + half }
    }
}
