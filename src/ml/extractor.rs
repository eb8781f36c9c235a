//! Feature extractor boundary
//!
//! Pretrained-model inference lives outside this crate. The judge only needs
//! an extractor that can be initialized once and then asked for an opaque
//! feature vector per image; the vector itself does not feed the score.

use async_trait::async_trait;

use crate::error::DetectionError;
use crate::io::PixelBuffer;

/// Opaque feature vector returned by an extractor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector(pub Vec<f32>);

impl FeatureVector {
    /// Number of features
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the extractor produced no features
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Pluggable feature extractor (e.g. a MobileNet embedding model)
#[async_trait]
pub trait FeatureExtractor: Send + Sync {
    /// Load model weights; must succeed before [`FeatureExtractor::infer`]
    async fn initialize(&mut self) -> Result<(), DetectionError>;

    /// Whether [`FeatureExtractor::initialize`] has completed successfully
    fn is_initialized(&self) -> bool;

    /// Extract features from one image
    ///
    /// # Errors
    ///
    /// `ExtractorUnavailable` if called before a successful initialize.
    async fn infer(&self, pixels: &PixelBuffer) -> Result<FeatureVector, DetectionError>;

    /// Short name used in log lines
    fn name(&self) -> &'static str;
}

/// Extractor that loads nothing and returns empty features
///
/// For hosts that only want the artifact heuristics, and for tests.
#[derive(Debug, Default)]
pub struct PassthroughExtractor {
    initialized: bool,
}

impl PassthroughExtractor {
    /// Create an uninitialized passthrough extractor
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeatureExtractor for PassthroughExtractor {
    async fn initialize(&mut self) -> Result<(), DetectionError> {
        self.initialized = true;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    async fn infer(&self, _pixels: &PixelBuffer) -> Result<FeatureVector, DetectionError> {
        if !self.initialized {
            return Err(DetectionError::ExtractorUnavailable(
                "passthrough extractor not initialized".to_string(),
            ));
        }
        Ok(FeatureVector::default())
    }

    fn name(&self) -> &'static str {
        "passthrough"
    }
}
