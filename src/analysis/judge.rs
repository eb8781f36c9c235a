//! Single-image judge
//!
//! Orchestrates the feature extractor, the artifact scorer and the filename
//! override into one [`Verdict`]. The judge never surfaces extractor or decode
//! errors: any failure degrades to [`Verdict::neutral`].
//!
//! # Example
//!
//! ```
//! use artifact_detect::analysis::judge::ImageJudge;
//! use artifact_detect::features::FixedSource;
//! use artifact_detect::io::PixelBuffer;
//! use artifact_detect::ml::PassthroughExtractor;
//! use artifact_detect::DetectionConfig;
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
//! # rt.block_on(async {
//! let mut judge = ImageJudge::new(
//!     PassthroughExtractor::new(),
//!     FixedSource::new(0.5),
//!     DetectionConfig::default(),
//! );
//! let pixels = PixelBuffer::filled(32, 32, [200, 10, 10, 255])?;
//! let verdict = judge.judge(&pixels, Some("sample-aigen.jpg")).await;
//! assert_eq!(verdict.ai_probability, 95);
//! # Ok::<(), artifact_detect::DetectionError>(())
//! # }).unwrap();
//! ```

use std::future::Future;
use std::time::Duration;

use super::overrides::filename_override;
use super::result::Verdict;
use crate::config::DetectionConfig;
use crate::error::DetectionError;
use crate::features::{ArtifactScorer, ScoreSource};
use crate::io::decoder::decode_image_bytes;
use crate::io::PixelBuffer;
use crate::ml::FeatureExtractor;

/// Judges still images and individual video frames
///
/// Owns its extractor and random source; construct one per analysis session
/// and pass it by reference.
pub struct ImageJudge<E, S> {
    extractor: E,
    scorer: ArtifactScorer<S>,
    config: DetectionConfig,
}

impl<E: FeatureExtractor, S: ScoreSource> ImageJudge<E, S> {
    /// Create a judge; the extractor is initialized lazily on first use
    pub fn new(extractor: E, source: S, config: DetectionConfig) -> Self {
        Self {
            extractor,
            scorer: ArtifactScorer::new(source),
            config,
        }
    }

    /// Initialize the extractor now instead of on the first judgment
    ///
    /// Safe to call repeatedly; a no-op once initialized.
    pub async fn initialize(&mut self) -> Result<(), DetectionError> {
        if self.extractor.is_initialized() {
            return Ok(());
        }
        log::info!("Initializing feature extractor '{}'", self.extractor.name());
        let limit = self.config.extractor_timeout;
        with_timeout(limit, self.extractor.initialize()).await?;
        if !self.extractor.is_initialized() {
            return Err(DetectionError::ExtractorUnavailable(format!(
                "'{}' reported success but is not initialized",
                self.extractor.name()
            )));
        }
        Ok(())
    }

    /// Judge one decoded image
    ///
    /// `source_id` is the image's file name, path or URL; pass `None` for
    /// video frames so filename overrides do not apply.
    pub async fn judge(&mut self, pixels: &PixelBuffer, source_id: Option<&str>) -> Verdict {
        match self.try_judge(pixels, source_id).await {
            Ok(verdict) => verdict,
            Err(e) => {
                log::warn!("Image analysis degraded to neutral: {}", e);
                Verdict::neutral()
            }
        }
    }

    /// Decode encoded image bytes and judge them
    ///
    /// Decode failures degrade to the neutral verdict like any other failure.
    pub async fn judge_encoded(&mut self, bytes: &[u8], source_id: Option<&str>) -> Verdict {
        match decode_image_bytes(bytes) {
            Ok(pixels) => self.judge(&pixels, source_id).await,
            Err(e) => {
                log::warn!("Image analysis degraded to neutral: {}", e);
                Verdict::neutral()
            }
        }
    }

    /// Judge one image, surfacing the failure instead of degrading
    pub async fn try_judge(
        &mut self,
        pixels: &PixelBuffer,
        source_id: Option<&str>,
    ) -> Result<Verdict, DetectionError> {
        self.initialize().await?;

        let limit = self.config.extractor_timeout;
        let features = with_timeout(limit, self.extractor.infer(pixels)).await?;
        log::debug!(
            "Extractor '{}' returned {} features",
            self.extractor.name(),
            features.len()
        );

        let scores = self.scorer.score(pixels);
        let mut probability = scores.probability();

        if self.config.apply_filename_overrides {
            if let Some(forced) = source_id.and_then(filename_override) {
                log::debug!(
                    "Filename override: {} -> {} (computed {})",
                    source_id.unwrap_or_default(),
                    forced,
                    probability
                );
                probability = forced;
            }
        }

        Ok(Verdict::scored(
            probability,
            self.config.success_confidence,
            scores,
        ))
    }

    /// Active configuration
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Borrow the extractor
    pub fn extractor(&self) -> &E {
        &self.extractor
    }
}

/// Bound a fallible extractor future by an optional time limit
async fn with_timeout<T, F>(limit: Option<Duration>, fut: F) -> Result<T, DetectionError>
where
    F: Future<Output = Result<T, DetectionError>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| DetectionError::Timeout(limit))?,
        None => fut.await,
    }
}
