// File: crates/plot-core/src/canvas.rs
// Summary: RGBA raster canvas with clipped pixel writes, line/bar runs and PNG encoding.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::error::Result;
use crate::types::Color;

/// In-memory pixel buffer a plot is drawn into before encoding.
/// Writes outside the canvas are ignored.
#[derive(Clone, Debug)]
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// Allocate a `width x height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self { img: RgbaImage::from_pixel(width, height, background) }
    }

    pub fn width(&self) -> u32 { self.img.width() }
    pub fn height(&self) -> u32 { self.img.height() }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width() && y < self.height() {
            self.img.put_pixel(x, y, color);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.img.get_pixel_checked(x, y).copied()
    }

    /// Full-height vertical line at column `x`.
    pub fn vline(&mut self, x: u32, color: Color) {
        for y in 0..self.height() {
            self.set_pixel(x, y, color);
        }
    }

    /// Full-width horizontal line at row `y`.
    pub fn hline(&mut self, y: u32, color: Color) {
        for x in 0..self.width() {
            self.set_pixel(x, y, color);
        }
    }

    /// Vertical run of `len` pixels at column `x`, growing upward from the bottom row.
    pub fn bar(&mut self, x: u32, len: u32, color: Color) {
        let h = self.height();
        for j in 0..len.min(h) {
            self.set_pixel(x, h - 1 - j, color);
        }
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count_pixels(&self, color: Color) -> usize {
        self.img.pixels().filter(|p| **p == color).count()
    }

    /// Raw RGBA8 bytes, row-major, stride `width * 4`.
    pub fn as_raw(&self) -> &[u8] {
        self.img.as_raw()
    }

    /// Encode the canvas as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.img.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }
}
