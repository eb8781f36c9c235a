//! Artifact scorer: four sub-scores and their mean
//!
//! # Example
//!
//! ```
//! use artifact_detect::features::random::FixedSource;
//! use artifact_detect::features::scorer::ArtifactScorer;
//! use artifact_detect::io::PixelBuffer;
//!
//! let pixels = PixelBuffer::filled(64, 64, [30, 60, 90, 255])?;
//! let mut scorer = ArtifactScorer::new(FixedSource::new(0.5));
//! let scores = scorer.score(&pixels);
//! assert!((0.0..=1.0).contains(&scores.average()));
//! # Ok::<(), artifact_detect::DetectionError>(())
//! ```

use serde::Serialize;

use super::color::color_distribution_score;
use super::edges::edge_pattern_score;
use super::placeholders::{facial_anomaly_score, texture_inconsistency_score};
use super::random::ScoreSource;
use crate::io::PixelBuffer;

/// Per-image artifact sub-scores
///
/// Each sub-score lies in [0, 1]. `average` is computed on construction and the
/// record cannot be modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactScores {
    color_distribution: f64,
    edge_patterns: f64,
    facial_anomalies: f64,
    texture_inconsistencies: f64,
    average: f64,
}

impl ArtifactScores {
    /// Build from four sub-scores, clamping each to [0, 1]
    pub fn new(
        color_distribution: f64,
        edge_patterns: f64,
        facial_anomalies: f64,
        texture_inconsistencies: f64,
    ) -> Self {
        let color_distribution = unit_clamp(color_distribution);
        let edge_patterns = unit_clamp(edge_patterns);
        let facial_anomalies = unit_clamp(facial_anomalies);
        let texture_inconsistencies = unit_clamp(texture_inconsistencies);
        let average =
            (color_distribution + edge_patterns + facial_anomalies + texture_inconsistencies) / 4.0;
        Self {
            color_distribution,
            edge_patterns,
            facial_anomalies,
            texture_inconsistencies,
            average,
        }
    }

    /// Brightness-histogram uniformity
    pub fn color_distribution(&self) -> f64 {
        self.color_distribution
    }

    /// Edge-pattern score (random base + aspect term)
    pub fn edge_patterns(&self) -> f64 {
        self.edge_patterns
    }

    /// Facial-anomaly placeholder
    pub fn facial_anomalies(&self) -> f64 {
        self.facial_anomalies
    }

    /// Texture-inconsistency placeholder
    pub fn texture_inconsistencies(&self) -> f64 {
        self.texture_inconsistencies
    }

    /// Unweighted mean of the four sub-scores
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Average mapped to an integer percentage in [0, 100]
    pub fn probability(&self) -> u8 {
        (self.average * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Scores pixel buffers using an injected random source
///
/// Scoring is a pure function of the pixels and the values drawn from the
/// source. Each call draws three values in a fixed order: edge base, facial
/// anomaly, texture.
#[derive(Debug, Clone)]
pub struct ArtifactScorer<S> {
    source: S,
}

impl<S: ScoreSource> ArtifactScorer<S> {
    /// Create a scorer drawing from `source`
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Compute all four sub-scores for `pixels`
    pub fn score(&mut self, pixels: &PixelBuffer) -> ArtifactScores {
        log::debug!(
            "Scoring artifacts: {}x{} ({} pixels)",
            pixels.width(),
            pixels.height(),
            pixels.pixel_count()
        );

        let color = color_distribution_score(pixels);
        let edges = edge_pattern_score(pixels.width(), pixels.height(), &mut self.source);
        let face = facial_anomaly_score(&mut self.source);
        let texture = texture_inconsistency_score(&mut self.source);

        let scores = ArtifactScores::new(color, edges, face, texture);
        log::debug!(
            "Artifact scores: color={:.3}, edges={:.3}, face={:.3}, texture={:.3}, average={:.3}",
            scores.color_distribution,
            scores.edge_patterns,
            scores.facial_anomalies,
            scores.texture_inconsistencies,
            scores.average
        );
        scores
    }

    /// Borrow the random source
    pub fn source(&self) -> &S {
        &self.source
    }
}

fn unit_clamp(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}
