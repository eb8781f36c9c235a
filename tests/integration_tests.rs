//! Integration tests for the artifact detection pipeline

use std::collections::HashSet;

use artifact_detect::analysis::judge::ImageJudge;
use artifact_detect::features::ArtifactScorer;
use artifact_detect::ml::{FeatureExtractor, FeatureVector, PassthroughExtractor};
use artifact_detect::video::FrameSource;
use artifact_detect::{
    analyze_image, DetectionConfig, DetectionError, FixedSource, PixelBuffer, SeededSource,
    VerdictLabel, VideoAggregator,
};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Synthetic gradient image with a mix of brightness levels
fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = ((x + y) * 255 / (width + height - 2).max(1)) as u8;
            data.extend_from_slice(&[v, v / 2, 255 - v, 255]);
        }
    }
    PixelBuffer::from_raw(width, height, data).expect("valid gradient")
}

fn judge_with(source: FixedSource) -> ImageJudge<PassthroughExtractor, FixedSource> {
    ImageJudge::new(PassthroughExtractor::new(), source, DetectionConfig::default())
}

/// Mock video: fixed duration, optionally failing at chosen sample times,
/// and recording the seek order.
struct MockVideo {
    duration: f64,
    dimensions: (u32, u32),
    fail_at: HashSet<u64>,
    seeks: Vec<f64>,
    released: bool,
    cancel_after: Option<(usize, CancellationToken)>,
}

impl MockVideo {
    fn new(duration: f64) -> Self {
        Self {
            duration,
            dimensions: (64, 36),
            fail_at: HashSet::new(),
            seeks: Vec::new(),
            released: false,
            cancel_after: None,
        }
    }

    fn failing_at(mut self, time_point: f64) -> Self {
        self.fail_at.insert(time_point.to_bits());
        self
    }
}

#[async_trait]
impl FrameSource for MockVideo {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    async fn decode_frame(
        &mut self,
        time_point: f64,
        canvas: &mut PixelBuffer,
    ) -> Result<(), DetectionError> {
        self.seeks.push(time_point);
        if let Some((n, token)) = &self.cancel_after {
            if self.seeks.len() >= *n {
                token.cancel();
            }
        }
        if self.fail_at.contains(&time_point.to_bits()) {
            return Err(DetectionError::DecodeFailure("seek failed".to_string()));
        }
        // Horizontal gray ramp: spreads brightness evenly over the histogram
        let width = canvas.width() as usize;
        for (i, px) in canvas.as_rgba_mut().chunks_exact_mut(4).enumerate() {
            let v = ((i % width) * 256 / width) as u8;
            px.copy_from_slice(&[v, v, v, 255]);
        }
        Ok(())
    }

    fn release(&mut self) {
        self.released = true;
    }
}

struct UnavailableExtractor;

#[async_trait]
impl FeatureExtractor for UnavailableExtractor {
    async fn initialize(&mut self) -> Result<(), DetectionError> {
        Err(DetectionError::ExtractorUnavailable("model download failed".to_string()))
    }

    fn is_initialized(&self) -> bool {
        false
    }

    async fn infer(&self, _pixels: &PixelBuffer) -> Result<FeatureVector, DetectionError> {
        Err(DetectionError::ExtractorUnavailable("not initialized".to_string()))
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_is_mean_for_any_seed() {
        let images = [gradient(50, 50), gradient(120, 30), gradient(1, 1)];
        for seed in 0..20 {
            let mut scorer = ArtifactScorer::new(SeededSource::from_seed_u64(seed));
            for img in &images {
                let s = scorer.score(img);
                let mean = (s.color_distribution()
                    + s.edge_patterns()
                    + s.facial_anomalies()
                    + s.texture_inconsistencies())
                    / 4.0;
                assert!((0.0..=1.0).contains(&s.average()));
                assert!((s.average() - mean).abs() < 1e-12);
            }
        }
    }

    #[tokio::test]
    async fn test_aigen_filename_forces_95() {
        for value in [0.0, 0.5, 1.0] {
            let mut judge = judge_with(FixedSource::new(value));
            for img in [gradient(40, 40), PixelBuffer::filled(9, 9, [0, 0, 0, 255]).unwrap()] {
                let verdict = judge.judge(&img, Some("sample-aigen.jpg")).await;
                assert_eq!(verdict.ai_probability, 95);
                assert_eq!(verdict.label(), VerdictLabel::AiGenerated);
            }
        }
    }

    #[tokio::test]
    async fn test_original_filename_forces_5() {
        for value in [0.0, 0.5, 1.0] {
            let mut judge = judge_with(FixedSource::new(value));
            let verdict = judge.judge(&gradient(80, 20), Some("original-1.png")).await;
            assert_eq!(verdict.ai_probability, 5);
            assert_eq!(verdict.explanation, "Image appears authentic");
        }
    }

    #[tokio::test]
    async fn test_unmatched_filename_uses_rounded_average() {
        let mut judge = judge_with(FixedSource::new(0.8));
        let verdict = judge.judge(&gradient(64, 64), Some("beach.png")).await;
        let avg = verdict.details.expect("details").average();
        assert_eq!(verdict.ai_probability, (avg * 100.0).round() as u8);
        assert_eq!(verdict.confidence, 0.95);
        assert!(verdict.error.is_none());
    }

    #[tokio::test]
    async fn test_judge_is_idempotent_for_same_source_state() {
        let img = gradient(48, 32);
        let mut a = ImageJudge::new(
            PassthroughExtractor::new(),
            SeededSource::from_seed_u64(2024),
            DetectionConfig::default(),
        );
        let mut b = ImageJudge::new(
            PassthroughExtractor::new(),
            SeededSource::from_seed_u64(2024),
            DetectionConfig::default(),
        );
        let va = a.judge(&img, Some("beach.png")).await;
        let vb = b.judge(&img, Some("beach.png")).await;
        assert_eq!(va.ai_probability, vb.ai_probability);
        assert_eq!(va.explanation, vb.explanation);

        let mut fixed = judge_with(FixedSource::new(0.42));
        let first = fixed.judge(&img, None).await;
        let second = fixed.judge(&img, None).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unavailable_extractor_degrades_to_neutral() {
        let mut judge = ImageJudge::new(
            UnavailableExtractor,
            FixedSource::new(0.9),
            DetectionConfig::default(),
        );
        let verdict = judge.judge(&gradient(10, 10), Some("aigen.png")).await;
        assert_eq!(verdict.ai_probability, 50);
        assert_eq!(verdict.confidence, 0.5);
        assert_eq!(verdict.explanation, "Analysis failed; result is neutral.");
        assert!(verdict.details.is_none());
    }

    #[tokio::test]
    async fn test_analyze_image_entry_point() {
        let verdict = analyze_image(&gradient(30, 30), Some("og.jpg"), DetectionConfig::default()).await;
        assert_eq!(verdict.ai_probability, 5);

        let verdict = analyze_image(&gradient(30, 30), None, DetectionConfig::default()).await;
        assert!(verdict.ai_probability <= 100);
        assert!(verdict.details.is_some());
    }

    #[tokio::test]
    async fn test_short_video_yields_one_frame() {
        let mut aggregator = VideoAggregator::new(judge_with(FixedSource::new(0.5)));
        let mut video = MockVideo::new(0.4);
        let analysis = aggregator
            .analyze(&mut video, 1.0, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(analysis.frames.len(), 1);
        assert_eq!(analysis.frames[0].time_point, 0.0);
        assert!(!analysis.cancelled);
        assert!(video.released);
    }

    #[tokio::test]
    async fn test_five_second_video_sample_times() {
        let mut aggregator = VideoAggregator::new(judge_with(FixedSource::new(0.5)));
        let mut video = MockVideo::new(5.0);
        let analysis = aggregator
            .analyze(&mut video, 1.0, &CancellationToken::new())
            .await
            .unwrap();

        let times: Vec<f64> = analysis.frames.iter().map(|f| f.time_point).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(video.seeks, times);
        assert_eq!(analysis.summary.total_frames, 5);
        assert!(analysis.frame_at(3.0).is_some());
        assert!(analysis.frame_at(3.5).is_none());
    }

    #[tokio::test]
    async fn test_video_frames_ignore_filename_overrides() {
        // Frames carry no source id, so the computed score always stands
        let mut aggregator = VideoAggregator::new(judge_with(FixedSource::new(0.0)));
        let mut video = MockVideo::new(3.0);
        let analysis = aggregator
            .analyze(&mut video, 1.0, &CancellationToken::new())
            .await
            .unwrap();
        assert!(analysis
            .frames
            .iter()
            .all(|f| f.ai_probability != 95 && f.ai_probability != 5));
    }

    #[tokio::test]
    async fn test_failed_frame_is_isolated() {
        let mut aggregator = VideoAggregator::new(judge_with(FixedSource::new(0.5)));
        let mut video = MockVideo::new(5.0).failing_at(2.0);
        let analysis = aggregator
            .analyze(&mut video, 1.0, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(analysis.frames.len(), 5);
        let failed = analysis.frame_at(2.0).unwrap();
        assert_eq!(failed.ai_probability, 0);
        assert_eq!(failed.explanation, "Frame analysis failed");
        for f in analysis.frames.iter().filter(|f| f.time_point != 2.0) {
            assert_ne!(f.explanation, "Frame analysis failed");
        }
    }

    #[tokio::test]
    async fn test_extractor_failure_in_frames_is_neutral() {
        let judge = ImageJudge::new(
            UnavailableExtractor,
            FixedSource::new(0.5),
            DetectionConfig::default(),
        );
        let mut aggregator = VideoAggregator::new(judge);
        let mut video = MockVideo::new(2.0);
        let analysis = aggregator
            .analyze(&mut video, 1.0, &CancellationToken::new())
            .await
            .unwrap();

        assert!(analysis.frames.iter().all(|f| f.ai_probability == 50));
        assert_eq!(analysis.summary.suspicious_frames, 2);
        assert_eq!(analysis.summary.verdict, VerdictLabel::LikelyAuthentic);
    }

    #[tokio::test]
    async fn test_cancellation_keeps_partial_results() {
        let token = CancellationToken::new();
        let mut video = MockVideo::new(10.0);
        video.cancel_after = Some((3, token.clone()));

        let mut aggregator = VideoAggregator::new(judge_with(FixedSource::new(0.5)));
        let analysis = aggregator.analyze(&mut video, 1.0, &token).await.unwrap();

        assert!(analysis.cancelled);
        assert_eq!(analysis.frames.len(), 3);
        assert_eq!(video.seeks.len(), 3);
        assert!(video.released);
        assert_eq!(analysis.summary.total_frames, 3);
    }

    #[tokio::test]
    async fn test_pre_cancelled_run_is_empty() {
        let token = CancellationToken::new();
        token.cancel();
        let mut video = MockVideo::new(4.0);
        let mut aggregator = VideoAggregator::new(judge_with(FixedSource::new(0.5)));
        let analysis = aggregator.analyze(&mut video, 1.0, &token).await.unwrap();

        assert!(analysis.cancelled);
        assert!(analysis.frames.is_empty());
        assert!(analysis.highlighted().is_none());
        assert!(video.seeks.is_empty());
    }

    #[tokio::test]
    async fn test_zero_dimension_source_uses_default_canvas() {
        let mut video = MockVideo::new(1.0);
        video.dimensions = (0, 0);
        let mut aggregator = VideoAggregator::new(judge_with(FixedSource::new(0.5)));
        let analysis = aggregator
            .analyze_default(&mut video, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(analysis.frames.len(), 1);
        assert!(analysis.frames[0].explanation != "Frame analysis failed");
    }

    #[tokio::test]
    async fn test_invalid_interval_is_rejected() {
        let mut aggregator = VideoAggregator::new(judge_with(FixedSource::new(0.5)));
        let mut video = MockVideo::new(5.0);
        let err = aggregator
            .analyze(&mut video, 0.0, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DetectionError::InvalidInput(_)));
        assert!(video.seeks.is_empty());
        assert!(video.released);
    }

    #[tokio::test]
    async fn test_huge_duration_is_rejected_without_seeking() {
        let mut aggregator = VideoAggregator::new(judge_with(FixedSource::new(0.5)));
        let mut video = MockVideo::new(f64::MAX);
        let err = aggregator
            .analyze(&mut video, 1.0, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DetectionError::InvalidInput(_)));
        assert!(video.seeks.is_empty());
        assert!(video.released);
    }

    #[tokio::test]
    async fn test_unusable_canvas_size_releases_source() {
        let config = DetectionConfig {
            default_frame_width: 0,
            ..DetectionConfig::default()
        };
        let judge = ImageJudge::new(PassthroughExtractor::new(), FixedSource::new(0.5), config);
        let mut aggregator = VideoAggregator::new(judge);
        let cancel = CancellationToken::new();

        // First run caches a canvas
        let mut good = MockVideo::new(2.0);
        assert_eq!(aggregator.analyze(&mut good, 1.0, &cancel).await.unwrap().frames.len(), 2);

        let mut broken = MockVideo::new(2.0);
        broken.dimensions = (0, 0);
        let err = aggregator.analyze(&mut broken, 1.0, &cancel).await.unwrap_err();
        assert!(matches!(err, DetectionError::DecodeFailure(_)));
        assert!(broken.seeks.is_empty());
        assert!(broken.released);

        // Cached canvas survives the failed run
        let mut again = MockVideo::new(3.0);
        let analysis = aggregator.analyze(&mut again, 1.0, &cancel).await.unwrap();
        assert_eq!(analysis.frames.len(), 3);
        assert!(again.released);
    }

    #[tokio::test]
    async fn test_highlight_follows_first_ai_frame() {
        // Uniform ramp (color 1.0) + saturated edges + max placeholders = 80%
        let mut video = MockVideo::new(3.0);
        video.dimensions = (400, 40);
        let mut aggregator = VideoAggregator::new(judge_with(FixedSource::new(1.0)));
        let analysis = aggregator
            .analyze(&mut video, 1.0, &CancellationToken::new())
            .await
            .unwrap();

        assert!(analysis.frames.iter().all(|f| f.ai_probability > 70));
        assert_eq!(analysis.summary.verdict, VerdictLabel::AiGenerated);
        assert_eq!(analysis.highlighted().unwrap().time_point, 0.0);
    }
}
