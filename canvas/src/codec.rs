//! Raster serialization and image-file import.
//!
//! Submission always uses PNG. Imports accept whatever the `image` crate can
//! sniff from the bytes and are scaled to the surface's intrinsic size.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

/// Errors from encoding the surface or decoding an imported file.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The imported bytes are empty, truncated, or not a supported image.
    #[error("image decode failed: {0}")]
    Decode(String),

    /// The buffer could not be written as PNG.
    #[error("image encode failed: {0}")]
    Encode(String),
}

/// Encode an RGBA buffer as PNG bytes.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if the encoder rejects the buffer.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgba8)
        .map_err(|e| CodecError::Encode(e.to_string()))?;
    Ok(out)
}

/// Decode an imported file and scale it to `width` x `height`.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for empty or unreadable input.
pub fn decode_import(bytes: &[u8], width: u32, height: u32) -> Result<RgbaImage, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::Decode("empty file".to_owned()));
    }
    let decoded = image::load_from_memory(bytes).map_err(|e| CodecError::Decode(e.to_string()))?;
    Ok(fit_to(decoded.to_rgba8(), width, height))
}

/// Scale `image` to exactly `width` x `height`. Same-size input is returned untouched.
#[must_use]
pub fn fit_to(image: RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        image
    } else {
        imageops::resize(&image, width, height, FilterType::Triangle)
    }
}
