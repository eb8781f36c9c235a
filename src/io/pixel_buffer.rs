//! Decoded RGBA pixel grid shared by the scorers and frame sources

use crate::error::DetectionError;

/// Bytes per RGBA sample
pub const CHANNELS: usize = 4;

/// Decoded image as a row-major grid of RGBA samples
///
/// Scorers only ever borrow a buffer immutably. Video analysis reuses a single
/// buffer as its scratch canvas, which is only sound because frames are decoded
/// into it one at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Raw RGBA bytes, `width * height * 4` long
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a zeroed (transparent black) buffer
    pub fn new(width: u32, height: u32) -> Result<Self, DetectionError> {
        let len = byte_len(width, height)?;
        Ok(Self {
            data: vec![0; len],
            width,
            height,
        })
    }

    /// Wrap raw RGBA bytes
    ///
    /// # Errors
    ///
    /// `DecodeFailure` for a zero-sized grid, `InvalidInput` when `data` is not
    /// exactly `width * height * 4` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, DetectionError> {
        let len = byte_len(width, height)?;
        if data.len() != len {
            return Err(DetectionError::InvalidInput(format!(
                "expected {} RGBA bytes for {}x{}, got {}",
                len,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self { data, width, height })
    }

    /// Buffer filled with one color
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, DetectionError> {
        let len = byte_len(width, height)?;
        let data = rgba.iter().copied().cycle().take(len).collect();
        Ok(Self { data, width, height })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (never zero)
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Raw RGBA bytes
    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    /// Mutable RGBA bytes, for frame sources drawing into the scratch canvas
    pub fn as_rgba_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Iterate over pixels as `[r, g, b, a]`
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Change dimensions in place, keeping the allocation where possible
    ///
    /// Contents are unspecified afterwards; callers are expected to redraw.
    pub fn reshape(&mut self, width: u32, height: u32) -> Result<(), DetectionError> {
        let len = byte_len(width, height)?;
        self.data.resize(len, 0);
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Consume into raw bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

fn byte_len(width: u32, height: u32) -> Result<usize, DetectionError> {
    if width == 0 || height == 0 {
        return Err(DetectionError::DecodeFailure(format!(
            "image has no pixels ({}x{})",
            width, height
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| {
            DetectionError::InvalidInput(format!("image too large: {}x{}", width, height))
        })
}
