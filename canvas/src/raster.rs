//! RGBA backing buffer and stroke rasterizer.
//!
//! Strokes are drawn as capsules: every pixel whose centre lies within half
//! the stroke width of the segment is painted. Consecutive capsules share
//! their endpoint discs, which gives round caps and round joins without any
//! path bookkeeping. There is no anti-aliasing, so a pixel is either
//! background or ink.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use image::{Rgba, RgbaImage};

use crate::codec;
use crate::mapper::Point;

/// The pixel buffer backing the capture surface.
#[derive(Debug, Clone)]
pub struct Raster {
    pixels: RgbaImage,
}

impl Raster {
    /// A buffer of the given size filled with `fill`.
    #[must_use]
    pub fn new(width: u32, height: u32, fill: Rgba<u8>) -> Self {
        Self { pixels: RgbaImage::from_pixel(width, height, fill) }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Read-only view of the pixels.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba<u8>) {
        for px in self.pixels.pixels_mut() {
            *px = color;
        }
    }

    /// Replace the whole buffer, scaling `image` to the current dimensions.
    pub fn replace(&mut self, image: RgbaImage) {
        self.pixels = codec::fit_to(image, self.width(), self.height());
    }

    /// True iff every pixel's RGB channels equal `background`'s. Alpha is ignored.
    #[must_use]
    pub fn is_blank(&self, background: Rgba<u8>) -> bool {
        let [r, g, b, _] = background.0;
        self.pixels.pixels().all(|px| px.0[0] == r && px.0[1] == g && px.0[2] == b)
    }

    /// Rasterize one segment with round caps. Returns the number of pixels painted.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn stroke_segment(&mut self, from: Point, to: Point, width: f64, color: Rgba<u8>) -> usize {
        let radius = width / 2.0;
        if !(radius > 0.0) {
            return 0;
        }

        let max_x = f64::from(self.width());
        let max_y = f64::from(self.height());
        let x0 = (from.x.min(to.x) - radius).floor().clamp(0.0, max_x) as u32;
        let x1 = (from.x.max(to.x) + radius).ceil().clamp(0.0, max_x) as u32;
        let y0 = (from.y.min(to.y) - radius).floor().clamp(0.0, max_y) as u32;
        let y1 = (from.y.max(to.y) + radius).ceil().clamp(0.0, max_y) as u32;

        let mut painted = 0;
        for y in y0..y1 {
            for x in x0..x1 {
                let centre = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if distance_to_segment(centre, from, to) <= radius {
                    self.pixels.put_pixel(x, y, color);
                    painted += 1;
                }
            }
        }
        painted
    }
}

/// Euclidean distance from `p` to the closed segment `a`–`b`.
#[must_use]
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let cx = a.x + t * dx;
    let cy = a.y + t * dy;
    (p.x - cx).hypot(p.y - cy)
}
