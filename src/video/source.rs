//! Video frame source boundary
//!
//! The host owns the actual decoder. The aggregator only needs the duration,
//! the native frame size, and a way to seek to a time and draw that frame into
//! the scratch canvas it provides.

use async_trait::async_trait;
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgba};

use crate::error::DetectionError;
use crate::io::PixelBuffer;

/// Seekable source of decoded video frames
///
/// Calls are strictly sequential: the aggregator never issues a new seek while
/// a previous `decode_frame` is outstanding.
#[async_trait]
pub trait FrameSource: Send {
    /// Duration in seconds; may be zero or non-finite if unknown
    fn duration(&self) -> f64;

    /// Native frame size; `(0, 0)` if unknown
    fn dimensions(&self) -> (u32, u32);

    /// Seek to `time_point` and draw that frame into `canvas`
    ///
    /// The canvas already has the size the aggregator wants; implementations
    /// scale into it rather than reshaping it.
    async fn decode_frame(
        &mut self,
        time_point: f64,
        canvas: &mut PixelBuffer,
    ) -> Result<(), DetectionError>;

    /// Release decoder resources once sampling stops
    fn release(&mut self) {}
}

/// In-memory source over already-decoded frames at a fixed frame rate
#[derive(Debug, Clone)]
pub struct FrameSequence {
    frames: Vec<PixelBuffer>,
    fps: f64,
}

impl FrameSequence {
    /// Wrap decoded frames played back at `fps`
    pub fn new(frames: Vec<PixelBuffer>, fps: f64) -> Result<Self, DetectionError> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(DetectionError::InvalidInput(format!(
                "frame rate must be positive, got {}",
                fps
            )));
        }
        Ok(Self { frames, fps })
    }

    /// Number of frames held
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if no frames are held
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[async_trait]
impl FrameSource for FrameSequence {
    fn duration(&self) -> f64 {
        self.frames.len() as f64 / self.fps
    }

    fn dimensions(&self) -> (u32, u32) {
        self.frames
            .first()
            .map(|f| (f.width(), f.height()))
            .unwrap_or((0, 0))
    }

    async fn decode_frame(
        &mut self,
        time_point: f64,
        canvas: &mut PixelBuffer,
    ) -> Result<(), DetectionError> {
        if self.frames.is_empty() {
            return Err(DetectionError::DecodeFailure(
                "frame sequence is empty".to_string(),
            ));
        }
        let index = ((time_point.max(0.0) * self.fps).floor() as usize).min(self.frames.len() - 1);
        draw_scaled(&self.frames[index], canvas)
    }
}

/// Draw `frame` into `canvas`, scaling if the sizes differ
pub fn draw_scaled(frame: &PixelBuffer, canvas: &mut PixelBuffer) -> Result<(), DetectionError> {
    if frame.width() == canvas.width() && frame.height() == canvas.height() {
        canvas.as_rgba_mut().copy_from_slice(frame.as_rgba());
        return Ok(());
    }

    let img: ImageBuffer<Rgba<u8>, &[u8]> =
        ImageBuffer::from_raw(frame.width(), frame.height(), frame.as_rgba())
            .ok_or_else(|| DetectionError::DecodeFailure("invalid frame dimensions".to_string()))?;
    let resized = imageops::resize(&img, canvas.width(), canvas.height(), FilterType::Triangle);
    canvas.as_rgba_mut().copy_from_slice(resized.as_raw());
    Ok(())
}
