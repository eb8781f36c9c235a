//! Verdict labels and classification thresholds
//!
//! Two threshold sets are in use and they are deliberately different:
//!
//! 1. **Per image / per frame**: probability > 70 is AI, 30 < p <= 70 is suspicious
//! 2. **Whole video**: share of AI frames > 50% is AI, 15% < share <= 50% is suspicious
//!
//! The aggregate judgment is the more conservative of the two.

use std::fmt;

use serde::Serialize;

/// Probability above which an image or frame counts as AI-generated
pub const AI_THRESHOLD: u8 = 70;

/// Probability above which an image or frame counts as suspicious
pub const SUSPICIOUS_THRESHOLD: u8 = 30;

/// Percentage of AI frames above which a video counts as AI-generated
pub const VIDEO_AI_RATIO: f64 = 50.0;

/// Percentage of AI frames above which a video counts as possibly manipulated
pub const VIDEO_SUSPICIOUS_RATIO: f64 = 15.0;

/// Probability above which the binary image classification says "AI"
pub const BINARY_THRESHOLD: u8 = 50;

/// Three-way classification shared by images, frames and videos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VerdictLabel {
    /// Strong AI indicators
    #[serde(rename = "AI-Generated")]
    AiGenerated,
    /// Some indicators of manipulation
    #[serde(rename = "Possibly Manipulated")]
    PossiblyManipulated,
    /// No meaningful indicators
    #[serde(rename = "Likely Authentic")]
    LikelyAuthentic,
}

impl VerdictLabel {
    /// Classify a single image or frame probability (70/30 thresholds)
    pub fn from_probability(probability: u8) -> Self {
        if probability > AI_THRESHOLD {
            VerdictLabel::AiGenerated
        } else if probability > SUSPICIOUS_THRESHOLD {
            VerdictLabel::PossiblyManipulated
        } else {
            VerdictLabel::LikelyAuthentic
        }
    }

    /// Classify a video by its percentage of AI frames (50/15 thresholds)
    pub fn from_video_ratio(ai_ratio_percent: f64) -> Self {
        if ai_ratio_percent > VIDEO_AI_RATIO {
            VerdictLabel::AiGenerated
        } else if ai_ratio_percent > VIDEO_SUSPICIOUS_RATIO {
            VerdictLabel::PossiblyManipulated
        } else {
            VerdictLabel::LikelyAuthentic
        }
    }

    /// Display name, e.g. "Possibly Manipulated"
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictLabel::AiGenerated => "AI-Generated",
            VerdictLabel::PossiblyManipulated => "Possibly Manipulated",
            VerdictLabel::LikelyAuthentic => "Likely Authentic",
        }
    }

    /// Explanation attached to a still-image verdict with this label
    pub fn image_explanation(&self) -> &'static str {
        match self {
            VerdictLabel::AiGenerated => "Image shows strong AI indicators",
            VerdictLabel::PossiblyManipulated => "Image may be manipulated",
            VerdictLabel::LikelyAuthentic => "Image appears authentic",
        }
    }
}

impl fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
