//! Configuration parameters for image and video analysis

use std::time::Duration;

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct DetectionConfig {
    // Video sampling
    /// Seconds between sampled video frames (default: 1.0)
    pub sample_interval_secs: f64,

    /// Frame width used when a video source reports zero (default: 300)
    pub default_frame_width: u32,

    /// Frame height used when a video source reports zero (default: 300)
    pub default_frame_height: u32,

    // Judging
    /// Confidence attached to every successful verdict (default: 0.95)
    pub success_confidence: f32,

    /// Upper bound on each extractor call (default: 10s)
    /// `None` waits indefinitely
    pub extractor_timeout: Option<Duration>,

    /// Honor filename test-pattern overrides for still images (default: true)
    pub apply_filename_overrides: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            sample_interval_secs: 1.0,
            default_frame_width: 300,
            default_frame_height: 300,
            success_confidence: 0.95,
            extractor_timeout: Some(Duration::from_secs(10)),
            apply_filename_overrides: true,
        }
    }
}
