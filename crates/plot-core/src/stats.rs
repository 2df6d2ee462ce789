// File: crates/plot-core/src/stats.rs
// Summary: Order statistics for box plots (rank quartiles and Tukey fences).

use crate::error::{PlotError, Result};

/// Tukey fence multiplier.
pub const TUKEY_K: f64 = 1.5;

/// Quartiles and fences of a sample.
///
/// Quartiles are picked by rank with integer division (`n/4`, `n/2`, `3n/4`
/// of the ascending sample) and are never interpolated between neighbours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
}

impl BoxStats {
    /// Compute from unsorted samples. The input is left untouched; a private copy is sorted.
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(PlotError::EmptyData);
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        Ok(Self::from_sorted(&sorted))
    }

    // `sorted` is ascending and non-empty.
    fn from_sorted(sorted: &[f64]) -> Self {
        let n = sorted.len();
        let q1 = sorted[n / 4];
        let median = sorted[n / 2];
        let q3 = sorted[3 * n / 4];
        let iqr = q3 - q1;
        Self {
            q1,
            median,
            q3,
            iqr,
            lower_fence: q1 - TUKEY_K * iqr,
            upper_fence: q3 + TUKEY_K * iqr,
        }
    }
}
