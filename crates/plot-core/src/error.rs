// File: crates/plot-core/src/error.rs
// Summary: Error type for range resolution, rendering, encoding and persisting.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for plot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while configuring or rendering a plot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Nothing to plot.
    #[error("dataset is empty")]
    EmptyData,

    /// A sample is NaN or infinite.
    #[error("sample {index} is not finite ({value})")]
    NonFiniteSample { index: usize, value: f64 },

    /// Explicit bounds are not finite or inverted.
    #[error("invalid range: min {min} must be finite and not above max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("bin count must be at least 1")]
    InvalidBinCount,

    #[error("invalid color '{0}', expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("unknown plot kind '{0}'")]
    UnknownPlotKind(String),

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    /// The output sink could not be created or written.
    #[error("failed to write {}", .path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlotError {
    /// Create a Sink error.
    pub fn sink(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Sink { path: path.into(), source }
    }
}
