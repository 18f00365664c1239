//! Shared constants for the capture surface.

// ── Stroke ──────────────────────────────────────────────────────

/// Fixed stroke width in intrinsic pixels.
pub const STROKE_WIDTH_PX: f64 = 15.0;

/// Ink color for freehand strokes (opaque black).
pub const INK: [u8; 4] = [0, 0, 0, 255];

// ── Surface ─────────────────────────────────────────────────────

/// Uniform background fill; also the emptiness baseline.
pub const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

/// Default intrinsic width and height of the square surface.
pub const DEFAULT_SIZE_PX: u32 = 280;

// ── Serialization ───────────────────────────────────────────────

/// MIME type of the serialized raster.
pub const PNG_MIME: &str = "image/png";
