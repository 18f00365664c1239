//! The capture surface: stroke lifecycle, clear, import, and emptiness.
//!
//! `CaptureSurface` is the sole owner and mutator of the pixel buffer. Other
//! components only read it, through [`CaptureSurface::snapshot`] or
//! [`CaptureSurface::is_empty`].

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use image::{Rgba, RgbaImage};

use crate::codec::{self, CodecError};
use crate::consts::{BACKGROUND, DEFAULT_SIZE_PX, INK, STROKE_WIDTH_PX};
use crate::input::{Action, PointerEvent, PointerKind, Segment, StrokeState};
use crate::mapper::{CoordinateMapper, Point, Rect};
use crate::raster::Raster;

/// Drawing surface with its backing buffer and stroke state.
#[derive(Debug, Clone)]
pub struct CaptureSurface {
    raster: Raster,
    mapper: CoordinateMapper,
    stroke: StrokeState,
    stroke_width: f64,
}

impl Default for CaptureSurface {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE_PX, DEFAULT_SIZE_PX)
    }
}

impl CaptureSurface {
    /// A blank surface of the given intrinsic size, displayed unscaled.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            raster: Raster::new(width, height, Rgba(BACKGROUND)),
            mapper: CoordinateMapper::new(width, height),
            stroke: StrokeState::Idle,
            stroke_width: STROKE_WIDTH_PX,
        }
    }

    /// Builder form of [`CaptureSurface::set_bounds`].
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.set_bounds(bounds);
        self
    }

    /// Record where the surface is currently displayed.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.mapper.set_bounds(bounds);
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    #[must_use]
    pub fn is_stroke_active(&self) -> bool {
        self.stroke.is_active()
    }

    #[must_use]
    pub fn stroke_state(&self) -> StrokeState {
        self.stroke
    }

    /// Borrow the pixels without copying.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        self.raster.pixels()
    }

    // --- Input events ---

    /// Dispatch a raw pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Action> {
        let client = event.client();
        match event.kind {
            PointerKind::Down => self.on_pointer_down(client),
            PointerKind::Move => self.on_pointer_move(client),
            PointerKind::Up => self.on_pointer_up(client),
            PointerKind::Leave => self.on_pointer_leave(client),
        }
    }

    /// Begin a new path at the mapped point. Nothing is painted yet.
    pub fn on_pointer_down(&mut self, client: Point) -> Vec<Action> {
        let at = self.mapper.map(client);
        self.stroke = StrokeState::Drawing { last: at };
        tracing::trace!(x = at.x, y = at.y, "stroke started");
        vec![Action::StrokeStarted(at)]
    }

    /// Extend the active path and render the new segment immediately.
    pub fn on_pointer_move(&mut self, client: Point) -> Vec<Action> {
        let StrokeState::Drawing { last } = self.stroke else {
            return Vec::new();
        };
        let at = self.mapper.map(client);
        self.raster.stroke_segment(last, at, self.stroke_width, Rgba(INK));
        self.stroke = StrokeState::Drawing { last: at };
        vec![Action::SegmentRendered(Segment { from: last, to: at })]
    }

    pub fn on_pointer_up(&mut self, _client: Point) -> Vec<Action> {
        self.end_stroke()
    }

    pub fn on_pointer_leave(&mut self, _client: Point) -> Vec<Action> {
        self.end_stroke()
    }

    fn end_stroke(&mut self) -> Vec<Action> {
        if !self.stroke.is_active() {
            return Vec::new();
        }
        self.stroke = StrokeState::Idle;
        tracing::trace!("stroke ended");
        vec![Action::StrokeEnded]
    }

    // --- Buffer operations ---

    /// Reset the buffer to the background fill. Stroke state is untouched.
    pub fn clear(&mut self) {
        self.raster.fill(Rgba(BACKGROUND));
        tracing::debug!("surface cleared");
    }

    /// True iff every pixel's RGB equals the background fill (alpha ignored).
    ///
    /// Scans the whole buffer; call it before submission, not per frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raster.is_blank(Rgba(BACKGROUND))
    }

    /// Copy of the buffer as it is right now.
    #[must_use]
    pub fn snapshot(&self) -> RgbaImage {
        self.raster.pixels().clone()
    }

    /// Replace the whole buffer with an already-decoded image, scaled to fit.
    pub fn replace(&mut self, image: RgbaImage) {
        self.raster.replace(image);
    }

    /// Decode `file` and draw it over the whole surface.
    ///
    /// Returns `Ok(false)` when no file was supplied. A decode failure leaves
    /// the buffer exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] if the bytes are not a readable image.
    pub fn import_image(&mut self, file: Option<&[u8]>) -> Result<bool, CodecError> {
        let Some(bytes) = file else {
            return Ok(false);
        };
        let decoded = codec::decode_import(bytes, self.width(), self.height())?;
        self.replace(decoded);
        tracing::debug!(bytes = bytes.len(), "image imported");
        Ok(true)
    }
}
