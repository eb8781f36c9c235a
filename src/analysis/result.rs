//! Analysis result types

use serde::Serialize;

use super::labels::{VerdictLabel, BINARY_THRESHOLD};
use crate::features::ArtifactScores;

/// Probability reported when analysis could not run
pub const NEUTRAL_PROBABILITY: u8 = 50;

/// Confidence reported when analysis could not run
pub const NEUTRAL_CONFIDENCE: f32 = 0.5;

/// Explanation attached to the neutral fallback verdict
pub const NEUTRAL_EXPLANATION: &str = "Analysis failed; result is neutral.";

/// Error note attached to the neutral fallback verdict
pub const NEUTRAL_ERROR: &str = "Failed to analyze image";

/// Explanation attached to a frame whose analysis failed
pub const FAILED_FRAME_EXPLANATION: &str = "Frame analysis failed";

/// Classification of one still image or video frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Likelihood of AI generation, 0-100
    pub ai_probability: u8,

    /// Confidence in the verdict (0.0-1.0)
    pub confidence: f32,

    /// Human-readable explanation
    pub explanation: String,

    /// Sub-scores behind the probability; `None` for the neutral fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ArtifactScores>,

    /// Failure note; `Some` only for the neutral fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Verdict {
    /// Verdict for a successfully scored image
    pub fn scored(ai_probability: u8, confidence: f32, details: ArtifactScores) -> Self {
        let ai_probability = ai_probability.min(100);
        Self {
            ai_probability,
            confidence,
            explanation: VerdictLabel::from_probability(ai_probability)
                .image_explanation()
                .to_string(),
            details: Some(details),
            error: None,
        }
    }

    /// Neutral fallback used whenever analysis cannot complete
    pub fn neutral() -> Self {
        Self {
            ai_probability: NEUTRAL_PROBABILITY,
            confidence: NEUTRAL_CONFIDENCE,
            explanation: NEUTRAL_EXPLANATION.to_string(),
            details: None,
            error: Some(NEUTRAL_ERROR.to_string()),
        }
    }

    /// True for the neutral fallback
    pub fn is_neutral_fallback(&self) -> bool {
        self.error.is_some()
    }

    /// Three-way label from the 70/30 thresholds
    pub fn label(&self) -> VerdictLabel {
        VerdictLabel::from_probability(self.ai_probability)
    }

    /// Binary classification: probability above 50
    pub fn is_ai_generated(&self) -> bool {
        self.ai_probability > BINARY_THRESHOLD
    }

    /// One-line banner text
    ///
    /// # Example
    ///
    /// ```
    /// use artifact_detect::analysis::result::Verdict;
    /// use artifact_detect::features::ArtifactScores;
    ///
    /// let v = Verdict::scored(12, 0.95, ArtifactScores::new(0.1, 0.1, 0.1, 0.2));
    /// assert_eq!(v.headline(), "Likely Authentic - 88% confident");
    /// ```
    pub fn headline(&self) -> String {
        let p = self.ai_probability;
        match self.label() {
            VerdictLabel::AiGenerated => format!("AI-GENERATED - {}% likely", p),
            VerdictLabel::PossiblyManipulated => format!("Possibly Manipulated - {}% likely", p),
            VerdictLabel::LikelyAuthentic => format!("Likely Authentic - {}% confident", 100 - p),
        }
    }
}

/// Result for one sampled video frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameResult {
    /// Sample time in seconds
    pub time_point: f64,

    /// Likelihood of AI generation, 0-100
    pub ai_probability: u8,

    /// Explanation carried over from the frame verdict
    pub explanation: String,
}

impl FrameResult {
    /// Frame result from a completed verdict
    pub fn from_verdict(time_point: f64, verdict: &Verdict) -> Self {
        Self {
            time_point,
            ai_probability: verdict.ai_probability,
            explanation: verdict.explanation.clone(),
        }
    }

    /// Zero-probability placeholder for a frame that could not be analyzed
    pub fn failed(time_point: f64) -> Self {
        Self {
            time_point,
            ai_probability: 0,
            explanation: FAILED_FRAME_EXPLANATION.to_string(),
        }
    }

    /// Three-way label from the 70/30 thresholds
    pub fn label(&self) -> VerdictLabel {
        VerdictLabel::from_probability(self.ai_probability)
    }

    /// True if the frame counts as AI (> 70)
    pub fn is_ai(&self) -> bool {
        self.label() == VerdictLabel::AiGenerated
    }

    /// True if the frame counts as suspicious (30 < p <= 70)
    pub fn is_suspicious(&self) -> bool {
        self.label() == VerdictLabel::PossiblyManipulated
    }

    /// Sample time as `MM:SS`
    pub fn timestamp(&self) -> String {
        format_timestamp(self.time_point)
    }
}

/// Aggregate over a completed sequence of frame results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    /// Number of frames analyzed
    pub total_frames: usize,

    /// Frames with probability > 70
    pub ai_frames: usize,

    /// Frames with 30 < probability <= 70
    pub suspicious_frames: usize,

    /// `ai_frames` as a rounded percentage of `total_frames`
    pub ai_percentage: u32,

    /// `suspicious_frames` as a rounded percentage of `total_frames`
    pub suspicious_percentage: u32,

    /// Unrounded percentage of AI frames (drives the verdict)
    pub overall_ratio: f64,

    /// Overall label from the 50/15 thresholds
    pub verdict: VerdictLabel,

    /// Index of the frame to show in detail, if any frames exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_index: Option<usize>,
}

impl VideoSummary {
    /// Summary line, e.g. "Possibly Manipulated (40% of frames highly suspicious)"
    pub fn describe(&self) -> String {
        format!(
            "{} ({}% of frames highly suspicious)",
            self.verdict,
            self.overall_ratio.round() as u32
        )
    }
}

/// Format seconds as zero-padded `MM:SS`
///
/// Minutes and seconds are both floored; negative or non-finite times print
/// as `00:00`.
pub fn format_timestamp(seconds: f64) -> String {
    let secs = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };
    let minutes = (secs / 60.0).floor() as u64;
    let rem = (secs % 60.0).floor() as u64;
    format!("{:02}:{:02}", minutes, rem)
}
