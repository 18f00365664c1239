//! Pointer-to-pixel coordinate mapping.
//!
//! The surface is displayed at whatever size the page lays it out at, but
//! strokes must land on the intrinsic backing buffer. Each axis is scaled by
//! `intrinsic_size / displayed_size` after subtracting the displayed origin.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use serde::{Deserialize, Serialize};

/// A point in either client (displayed) or intrinsic pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen bounding rectangle of the surface, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// A rect at the origin displayed at exactly the intrinsic size.
    #[must_use]
    pub fn unscaled(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, f64::from(width), f64::from(height))
    }
}

/// Map a client-space point into intrinsic pixel space.
///
/// A zero or negative displayed extent on an axis falls back to a scale of
/// `1.0` on that axis.
#[must_use]
pub fn map_pointer(client: Point, rect: Rect, intrinsic_w: u32, intrinsic_h: u32) -> Point {
    Point {
        x: (client.x - rect.left) * axis_scale(intrinsic_w, rect.width),
        y: (client.y - rect.top) * axis_scale(intrinsic_h, rect.height),
    }
}

fn axis_scale(intrinsic: u32, displayed: f64) -> f64 {
    if displayed > 0.0 { f64::from(intrinsic) / displayed } else { 1.0 }
}

/// Remembers the surface's current display rectangle and intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    bounds: Rect,
    width: u32,
    height: u32,
}

impl CoordinateMapper {
    /// A mapper for a surface displayed unscaled at the origin.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { bounds: Rect::unscaled(width, height), width, height }
    }

    /// Update the displayed rectangle (layout change, resize, scroll).
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[must_use]
    pub fn map(&self, client: Point) -> Point {
        map_pointer(client, self.bounds, self.width, self.height)
    }
}
