// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the plot renderer and its building blocks.

pub mod bins;
pub mod canvas;
pub mod error;
pub mod plot;
pub mod range;
pub mod scale;
pub mod sink;
pub mod stats;
pub mod types;

pub use bins::Bins;
pub use canvas::Canvas;
pub use error::{PlotError, Result};
pub use plot::PlotRenderer;
pub use range::DataRange;
pub use scale::LinearScale;
pub use stats::BoxStats;
pub use types::{parse_color, Color, PlotKind, BLACK, DEFAULT_BINS, HEIGHT, WHITE, WIDTH};
