// File: crates/plot-core/src/plot.rs
// Summary: PlotRenderer: dataset + display configuration, four render modes and PNG output.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::bins::Bins;
use crate::canvas::Canvas;
use crate::error::{PlotError, Result};
use crate::range::DataRange;
use crate::scale::LinearScale;
use crate::sink;
use crate::stats::BoxStats;
use crate::types::{Color, PlotKind, DEFAULT_BINS, WHITE};

/// A one-dimensional dataset together with how to draw it.
///
/// Every render resolves the data range first: explicit bounds set through
/// [`set_min`](Self::set_min), [`set_max`](Self::set_max) or
/// [`set_min_max`](Self::set_min_max) are honored, missing ones are taken from
/// the data. [`min_max`](Self::min_max) reports the range of the last render.
///
/// Rendering takes `&mut self` (resolved range and histogram bins are stored),
/// so one instance cannot be rendered from two places at once.
#[derive(Clone, Debug)]
pub struct PlotRenderer {
    data: Vec<f64>,
    width: u32,
    height: u32,
    color: Color,
    background: Color,
    name: String,
    sink_name: PathBuf,
    min: f64,
    max: f64,
    min_override: Option<f64>,
    max_override: Option<f64>,
    bins: usize,
    bin_width: f64,
    bin_height: f64,
    bin_centers: Vec<f64>,
    bin_counts: Vec<usize>,
}

impl PlotRenderer {
    pub fn new(
        data: Vec<f64>,
        width: u32,
        height: u32,
        color: Color,
        name: impl Into<String>,
        sink_name: impl Into<PathBuf>,
    ) -> Result<Self> {
        check_dimensions(width, height)?;
        let mut plot = Self {
            data,
            width,
            height,
            color,
            background: WHITE,
            name: name.into(),
            sink_name: sink_name.into(),
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            min_override: None,
            max_override: None,
            bins: DEFAULT_BINS,
            bin_width: 0.0,
            bin_height: 0.0,
            bin_centers: Vec::new(),
            bin_counts: Vec::new(),
        };
        plot.update_bin_dimensions();
        Ok(plot)
    }

    // ---- configuration ------------------------------------------------------

    pub fn bins(&self) -> usize { self.bins }

    /// Set the histogram bin count; bin pixel dimensions follow.
    pub fn set_bins(&mut self, bins: usize) -> Result<()> {
        if bins == 0 {
            return Err(PlotError::InvalidBinCount);
        }
        self.bins = bins;
        self.update_bin_dimensions();
        Ok(())
    }

    pub fn min(&self) -> f64 { self.min }
    pub fn max(&self) -> f64 { self.max }
    pub fn min_max(&self) -> (f64, f64) { (self.min, self.max) }

    /// Pin the lower bound used by subsequent renders.
    pub fn set_min(&mut self, min: f64) {
        self.min = min;
        self.min_override = Some(min);
    }

    /// Pin the upper bound used by subsequent renders.
    pub fn set_max(&mut self, max: f64) {
        self.max = max;
        self.max_override = Some(max);
    }

    pub fn set_min_max(&mut self, min: f64, max: f64) {
        self.set_min(min);
        self.set_max(max);
    }

    /// Drop pinned bounds; the next render derives the range from the data again.
    pub fn clear_range(&mut self) {
        self.min_override = None;
        self.max_override = None;
        self.min = f64::INFINITY;
        self.max = f64::NEG_INFINITY;
    }

    pub fn data(&self) -> &[f64] { &self.data }
    pub fn set_data(&mut self, data: Vec<f64>) { self.data = data; }

    pub fn width(&self) -> u32 { self.width }

    pub fn set_width(&mut self, width: u32) -> Result<()> {
        check_dimensions(width, self.height)?;
        self.width = width;
        self.update_bin_dimensions();
        Ok(())
    }

    pub fn height(&self) -> u32 { self.height }

    pub fn set_height(&mut self, height: u32) -> Result<()> {
        check_dimensions(self.width, height)?;
        self.height = height;
        self.update_bin_dimensions();
        Ok(())
    }

    pub fn color(&self) -> Color { self.color }
    pub fn set_color(&mut self, color: Color) { self.color = color; }

    pub fn background(&self) -> Color { self.background }
    pub fn set_background(&mut self, background: Color) { self.background = background; }

    pub fn name(&self) -> &str { &self.name }
    pub fn set_name(&mut self, name: impl Into<String>) { self.name = name.into(); }

    pub fn sink_name(&self) -> &Path { &self.sink_name }
    pub fn set_sink_name(&mut self, sink_name: impl Into<PathBuf>) { self.sink_name = sink_name.into(); }

    /// Left edges of the histogram bins; empty until a histogram has been rendered.
    pub fn bin_centers(&self) -> &[f64] { &self.bin_centers }
    /// Samples per bin; empty until a histogram has been rendered.
    pub fn bin_counts(&self) -> &[usize] { &self.bin_counts }
    pub fn bin_width(&self) -> f64 { self.bin_width }
    pub fn bin_height(&self) -> f64 { self.bin_height }

    /// Quartiles and fences of the current data. The data keeps its order.
    pub fn box_stats(&self) -> Result<BoxStats> {
        BoxStats::from_samples(&self.data)
    }

    fn update_bin_dimensions(&mut self) {
        self.bin_width = self.width as f64 / self.bins as f64;
        self.bin_height = self.height as f64 / self.bins as f64;
    }

    // ---- rendering ----------------------------------------------------------

    /// Draw `kind` onto a fresh canvas without touching the filesystem.
    pub fn render(&mut self, kind: PlotKind) -> Result<Canvas> {
        let range = self.resolve_range()?;
        let mut canvas = Canvas::new(self.width, self.height, self.background);
        match kind {
            PlotKind::Histogram => self.draw_histogram(&mut canvas, range),
            PlotKind::Scatter => self.draw_scatter(&mut canvas, range),
            PlotKind::Line => self.draw_line(&mut canvas, range),
            PlotKind::Box => self.draw_box(&mut canvas, range)?,
        }
        Ok(canvas)
    }

    /// Render `kind` and encode it as PNG bytes.
    pub fn render_to_png_bytes(&mut self, kind: PlotKind) -> Result<Vec<u8>> {
        self.render(kind)?.encode_png()
    }

    /// Render `kind` and write the PNG to the configured sink.
    pub fn save(&mut self, kind: PlotKind) -> Result<()> {
        let bytes = self.render_to_png_bytes(kind)?;
        sink::write_png(&self.sink_name, &bytes)
    }

    pub fn histogram(&mut self) -> Result<()> { self.save(PlotKind::Histogram) }
    pub fn scatter(&mut self) -> Result<()> { self.save(PlotKind::Scatter) }
    pub fn line(&mut self) -> Result<()> { self.save(PlotKind::Line) }
    /// Box plot; the data keeps its original order.
    pub fn box_plot(&mut self) -> Result<()> { self.save(PlotKind::Box) }

    fn resolve_range(&mut self) -> Result<DataRange> {
        let range = DataRange::resolve(&self.data, self.min_override, self.max_override)?;
        if range.is_degenerate() {
            warn!(name = %self.name, value = range.min, "degenerate data range, mapping onto a unit interval");
        }
        self.min = range.min;
        self.max = range.max;
        debug!(name = %self.name, min = range.min, max = range.max, samples = self.data.len(), "resolved range");
        Ok(range)
    }

    fn draw_histogram(&mut self, canvas: &mut Canvas, range: DataRange) {
        let bins = Bins::compute(&self.data, range, self.bins);
        let peak = bins.max_count();
        debug!(bins = bins.len(), peak, binned = bins.total(), "histogram");

        if peak > 0 {
            let h = self.height as u64;
            for (i, &count) in bins.counts.iter().enumerate() {
                let x = (i as f64 * self.bin_width + self.bin_width / 2.0).floor() as u32;
                let bar = (count as u64 * h / peak as u64) as u32;
                canvas.bar(x, bar, self.color);
            }
        }

        self.bin_centers = bins.centers;
        self.bin_counts = bins.counts;
    }

    // One full-height streak per sample.
    fn draw_scatter(&self, canvas: &mut Canvas, range: DataRange) {
        let sx = LinearScale::new(range, self.width);
        for &v in &self.data {
            if let Some(x) = sx.to_px(v) {
                canvas.vline(x, self.color);
            }
        }
    }

    // Filled bar per sample, one column right of its slot; the minimum still draws one pixel.
    // With at least as many samples as columns the last bar falls off the canvas.
    fn draw_line(&self, canvas: &mut Canvas, range: DataRange) {
        let sy = LinearScale::new(range, self.height);
        let n = self.data.len() as u64;
        for (i, &v) in self.data.iter().enumerate() {
            let x = (i as u64 * self.width as u64 / n) as u32 + 1;
            if let Some(y) = sy.to_px(v) {
                canvas.bar(x, y + 1, self.color);
            }
        }
    }

    fn draw_box(&self, canvas: &mut Canvas, range: DataRange) -> Result<()> {
        let stats = self.box_stats()?;
        debug!(?stats, "box");

        let sx = LinearScale::new(range, self.width);
        let sy = LinearScale::new(range, self.height);
        for fence in [stats.lower_fence, stats.upper_fence] {
            if let Some(y) = sy.to_px(fence) {
                canvas.hline(self.height - 1 - y, self.color);
            }
        }
        for q in [stats.q1, stats.median, stats.q3] {
            if let Some(x) = sx.to_px(q) {
                canvas.vline(x, self.color);
            }
        }
        Ok(())
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(PlotError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BLACK;

    fn plot(data: Vec<f64>) -> PlotRenderer {
        PlotRenderer::new(data, 100, 50, BLACK, "test", "unused.png").unwrap()
    }

    #[test]
    fn fresh_renderer_defaults() {
        let p = plot(vec![1.0]);
        assert_eq!(p.bins(), 100);
        assert_eq!(p.bin_width(), 1.0);
        assert_eq!(p.bin_height(), 0.5);
        assert_eq!(p.min_max(), (f64::INFINITY, f64::NEG_INFINITY));
        assert!(p.bin_centers().is_empty());
        assert!(p.bin_counts().is_empty());
        assert_eq!(p.background(), WHITE);
    }

    #[test]
    fn render_records_resolved_range() {
        let mut p = plot(vec![4.0, -2.0, 9.0]);
        p.render(PlotKind::Scatter).unwrap();
        assert_eq!(p.min_max(), (-2.0, 9.0));

        p.set_max(20.0);
        p.render(PlotKind::Line).unwrap();
        assert_eq!(p.min_max(), (-2.0, 20.0));

        p.clear_range();
        p.render(PlotKind::Line).unwrap();
        assert_eq!(p.min_max(), (-2.0, 9.0));
    }

    #[test]
    fn line_bars_scale_with_value() {
        // 4 samples on 100 px: columns 1, 26, 51, 76
        let mut p = plot(vec![0.0, 1.0, 2.0, 4.0]);
        let c = p.render(PlotKind::Line).unwrap();
        let column = |x: u32| (0..50).filter(|&y| c.pixel(x, y) == Some(BLACK)).count();
        assert_eq!(column(0), 0);
        assert_eq!(column(1), 1);
        assert_eq!(column(26), 13);
        assert_eq!(column(51), 26);
        assert_eq!(column(76), 50);
        assert_eq!(c.count_pixels(BLACK), 1 + 13 + 26 + 50);
    }

    #[test]
    fn scatter_streaks_cover_full_height() {
        let mut p = plot(vec![0.0, 10.0, 5.0, 5.0]);
        let c = p.render(PlotKind::Scatter).unwrap();
        for x in [0, 50, 99] {
            assert!((0..50).all(|y| c.pixel(x, y) == Some(BLACK)), "column {x}");
        }
        assert_eq!(c.count_pixels(BLACK), 3 * 50);
    }

    #[test]
    fn line_with_a_sample_per_column_loses_last_bar() {
        let mut p = plot((0..100).map(|i| i as f64).collect());
        let c = p.render(PlotKind::Line).unwrap();
        assert_eq!(c.pixel(0, 49), Some(WHITE));
        assert_eq!(c.pixel(1, 49), Some(BLACK));
        assert_eq!(c.pixel(99, 49), Some(BLACK));
    }
}
