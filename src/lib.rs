//! # Artifact Detect
//!
//! A heuristic artifact-scoring pipeline that labels still images and video
//! frames as AI-generated or authentic.
//!
//! ## Features
//!
//! - **Artifact Scoring**: color-distribution uniformity, edge patterns, and
//!   facial/texture placeholders averaged into one probability
//! - **Filename Overrides**: deterministic verdicts for test assets
//!   (`aigen.jpg` → 95, `og.jpg` → 5)
//! - **Video Aggregation**: frame sampling at a fixed interval with per-frame
//!   failure isolation, cancellation, and a conservative aggregate verdict
//! - **Pluggable Extraction**: any pretrained model behind the
//!   [`ml::FeatureExtractor`] trait
//!
//! The scores are heuristics, not a trained classifier. Three of the four
//! sub-scores include a uniform random term; inject a seeded or fixed
//! [`features::ScoreSource`] for reproducible results.
//!
//! ## Quick Start
//!
//! ```no_run
//! use artifact_detect::{analyze_image, DetectionConfig};
//! use artifact_detect::io::decoder::decode_image_file;
//!
//! # async fn run() -> Result<(), artifact_detect::DetectionError> {
//! let pixels = decode_image_file("photo.jpg")?;
//! let verdict = analyze_image(&pixels, Some("photo.jpg"), DetectionConfig::default()).await;
//!
//! println!("AI probability: {}% ({})", verdict.ai_probability, verdict.explanation);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Image/Video → Decode → Artifact Scoring (+ Feature Extractor) → Judge → Aggregate → Verdicts
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod ml;
pub mod video;

// Re-export main types
pub use analysis::judge::ImageJudge;
pub use analysis::labels::VerdictLabel;
pub use analysis::result::{FrameResult, Verdict, VideoSummary};
pub use config::DetectionConfig;
pub use error::DetectionError;
pub use features::{ArtifactScores, FixedSource, ScoreSource, SeededSource};
pub use io::PixelBuffer;
pub use video::{VideoAggregator, VideoAnalysis};

use ml::PassthroughExtractor;

/// Main analysis function
///
/// Judges one decoded image with the artifact heuristics only (no pretrained
/// extractor) and an entropy-seeded random source.
///
/// # Arguments
///
/// * `pixels` - Decoded RGBA image
/// * `source_id` - File name, path or URL of the image; `None` disables
///   filename overrides
/// * `config` - Analysis configuration
///
/// # Returns
///
/// A complete [`Verdict`]. Failures degrade to the neutral verdict
/// (50%, confidence 0.5) instead of returning an error.
pub async fn analyze_image(
    pixels: &PixelBuffer,
    source_id: Option<&str>,
    config: DetectionConfig,
) -> Verdict {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting image analysis: {}x{} from {:?}",
        pixels.width(),
        pixels.height(),
        source_id
    );

    let mut judge = ImageJudge::new(
        PassthroughExtractor::new(),
        SeededSource::from_entropy(),
        config,
    );
    let verdict = judge.judge(pixels, source_id).await;

    log::debug!(
        "Image analysis finished in {:.2} ms: {}%",
        start_time.elapsed().as_secs_f32() * 1000.0,
        verdict.ai_probability
    );
    verdict
}
