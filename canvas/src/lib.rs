//! Capture surface for handwritten digit input.
//!
//! This crate owns the drawing side of the digit client: translating raw
//! pointer events into intrinsic pixel coordinates, rasterizing strokes into
//! the backing RGBA buffer, deciding whether anything was actually drawn, and
//! converting the buffer to and from PNG. It is synchronous and runtime
//! agnostic; the `client` crate decides where the suspend points go.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`surface`] | [`surface::CaptureSurface`]: stroke lifecycle, clear, import, emptiness |
//! | [`mapper`] | Pointer-to-pixel coordinate mapping independent of CSS scaling |
//! | [`input`] | Pointer event types, stroke state machine, emitted actions |
//! | [`raster`] | RGBA pixel buffer and capsule stroke rasterizer |
//! | [`codec`] | PNG encoding and image-file import decoding |
//! | [`consts`] | Stroke width, colors, default surface size |

pub mod codec;
pub mod consts;
pub mod input;
pub mod mapper;
pub mod raster;
pub mod surface;

pub use image::{Rgba, RgbaImage};
