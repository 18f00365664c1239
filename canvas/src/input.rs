//! Input model: pointer events, the stroke state machine, and emitted actions.
//!
//! `StrokeState` is the only state the surface tracks between events. A
//! stroke is active from pointer-down until the next pointer-up or
//! pointer-leave; moves outside that window are ignored.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::mapper::Point;

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    /// Button pressed over the surface.
    Down,
    /// Pointer moved (button state irrelevant; the surface decides).
    Move,
    /// Button released.
    Up,
    /// Pointer left the surface.
    Leave,
}

/// A raw pointer event in client coordinates.
///
/// Serialized as `{"kind": "down", "x": 12.0, "y": 40.5}` so recorded
/// sessions can be replayed from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(kind: PointerKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    #[must_use]
    pub fn leave(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Leave, x, y)
    }

    /// Position in client space.
    #[must_use]
    pub fn client(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Stroke lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeState {
    /// No stroke in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A stroke is in progress.
    Drawing {
        /// Intrinsic-space end of the current path; the next segment starts here.
        last: Point,
    },
}

impl StrokeState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}

/// One rendered line segment, in intrinsic pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Side effects reported back to the host after each pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A new path was begun at this mapped point.
    StrokeStarted(Point),
    /// A segment was rasterized into the buffer.
    SegmentRendered(Segment),
    /// The active path was closed.
    StrokeEnded,
}
