//! Placeholder sub-scores with no detection logic behind them
//!
//! Facial-anomaly and texture scores are pure random draws scaled into a fixed
//! range. They carry no signal about the image and are kept only so the
//! four-way average behaves like the reference tool.

use super::random::ScoreSource;

/// Upper bound of the facial-anomaly score
pub const FACIAL_RANGE: f64 = 0.5;

/// Upper bound of the texture-inconsistency score
pub const TEXTURE_RANGE: f64 = 0.7;

/// Facial-anomaly placeholder in [0, 0.5]
pub fn facial_anomaly_score<S: ScoreSource + ?Sized>(source: &mut S) -> f64 {
    source.unit() * FACIAL_RANGE
}

/// Texture-inconsistency placeholder in [0, 0.7]
pub fn texture_inconsistency_score<S: ScoreSource + ?Sized>(source: &mut S) -> f64 {
    source.unit() * TEXTURE_RANGE
}
