// File: crates/plot-core/src/bins.rs
// Summary: Equal-width histogram binning over a data range.

use tracing::debug;

use crate::range::DataRange;

/// Histogram bins: `centers[i]` pairs with `counts[i]`.
/// Note: `centers` holds the left edge of each bin.
#[derive(Clone, Debug, PartialEq)]
pub struct Bins {
    pub centers: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Bins {
    /// Bin `samples` into `count` equal-width bins spanning `range` (count is raised to 1).
    /// Samples outside the range are left out.
    pub fn compute(samples: &[f64], range: DataRange, count: usize) -> Self {
        let count = count.max(1);
        let r = range.normalized();

        let centers = (0..count).map(|i| r.step(i, count)).collect();

        let mut counts = vec![0usize; count];
        let mut skipped = 0usize;
        for &v in samples {
            match bin_index(v, range, count) {
                Some(i) => counts[i] += 1,
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!(skipped, min = range.min, max = range.max, "samples outside range left unbinned");
        }
        Self { centers, counts }
    }

    pub fn len(&self) -> usize { self.counts.len() }
    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    /// Count of the fullest bin, 0 when nothing was binned.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Index of the bin holding `v`. The upper bound falls into the last bin;
/// values outside `range` give `None`. A degenerate range is binned over its
/// normalized interval but still only admits its own value.
pub fn bin_index(v: f64, range: DataRange, count: usize) -> Option<usize> {
    if v < range.min || v > range.max || count == 0 {
        return None;
    }
    let pos = range.normalized().position(v, count as f64).floor();
    Some((pos as usize).min(count - 1))
}
