//! Image decoding using the `image` crate

use std::path::Path;

use super::pixel_buffer::PixelBuffer;
use crate::error::DetectionError;

/// Decode an encoded image (PNG, JPEG, WebP, GIF, ...) held in memory
///
/// # Errors
///
/// Returns `DetectionError::DecodeFailure` if the format is unknown or the
/// data is corrupt.
pub fn decode_image_bytes(bytes: &[u8]) -> Result<PixelBuffer, DetectionError> {
    log::debug!("Decoding {} bytes of image data", bytes.len());
    let img = image::load_from_memory(bytes)
        .map_err(|e| DetectionError::DecodeFailure(e.to_string()))?;
    from_dynamic(img)
}

/// Decode an image file from disk
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Returns
///
/// Decoded RGBA pixel buffer
pub fn decode_image_file(path: impl AsRef<Path>) -> Result<PixelBuffer, DetectionError> {
    let path = path.as_ref();
    log::debug!("Decoding image file: {}", path.display());
    let img = image::open(path)
        .map_err(|e| DetectionError::DecodeFailure(format!("{}: {}", path.display(), e)))?;
    from_dynamic(img)
}

fn from_dynamic(img: image::DynamicImage) -> Result<PixelBuffer, DetectionError> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::from_raw(width, height, rgba.into_raw())
}
