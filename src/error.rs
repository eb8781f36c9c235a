//! Error types for the artifact detection pipeline

use std::fmt;
use std::time::Duration;

/// Errors that can occur during image or video analysis
///
/// Only [`DetectionError::InvalidInput`] is ever returned from the public
/// judging entry points. The remaining variants are produced internally and
/// converted into neutral verdicts or placeholder frame results.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionError {
    /// Feature extractor failed to load or was used before initialization
    ExtractorUnavailable(String),

    /// Image or frame could not be rasterized
    DecodeFailure(String),

    /// Isolated error while analyzing one sampled video frame
    FrameAnalysisFailure {
        /// Sample time of the failed frame in seconds
        time_point: f64,
        /// Underlying cause
        reason: String,
    },

    /// Extractor call exceeded the configured time limit
    Timeout(Duration),

    /// Invalid input parameters
    InvalidInput(String),
}

impl fmt::Display for DetectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionError::ExtractorUnavailable(msg) => {
                write!(f, "Feature extractor unavailable: {}", msg)
            }
            DetectionError::DecodeFailure(msg) => write!(f, "Decode failure: {}", msg),
            DetectionError::FrameAnalysisFailure { time_point, reason } => {
                write!(f, "Frame analysis failed at {:.2}s: {}", time_point, reason)
            }
            DetectionError::Timeout(limit) => {
                write!(f, "Extractor timed out after {} ms", limit.as_millis())
            }
            DetectionError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for DetectionError {}
