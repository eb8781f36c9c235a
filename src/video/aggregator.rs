//! Video aggregation
//!
//! Samples a video at a fixed interval, judges each sampled frame, and folds
//! the per-frame results into a [`VideoSummary`].
//!
//! Frame processing is strictly sequential. One scratch canvas is reused for
//! every frame, and the next seek is only issued after the previous frame has
//! been judged. A frame whose decode fails is replaced by a zero-probability
//! placeholder; the run continues.
//!
//! Cancellation is checked before each sample point. A cancelled run releases
//! the source and returns the frames produced so far.

use tokio_util::sync::CancellationToken;

use super::sampling::sample_points;
use super::source::FrameSource;
use crate::analysis::judge::ImageJudge;
use crate::analysis::labels::VerdictLabel;
use crate::analysis::result::{FrameResult, VideoSummary};
use crate::error::DetectionError;
use crate::features::ScoreSource;
use crate::io::PixelBuffer;
use crate::ml::FeatureExtractor;

/// Tolerance used when looking a frame up by its sample time
const TIME_EPSILON: f64 = 1e-9;

/// Outcome of one video analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct VideoAnalysis {
    /// Per-frame results in sample order
    pub frames: Vec<FrameResult>,

    /// Aggregate over `frames`
    pub summary: VideoSummary,

    /// True if the run stopped early on cancellation
    pub cancelled: bool,
}

impl VideoAnalysis {
    /// Frame result sampled at `time_point`
    pub fn frame_at(&self, time_point: f64) -> Option<&FrameResult> {
        self.frames
            .iter()
            .find(|f| (f.time_point - time_point).abs() < TIME_EPSILON)
    }

    /// Frame selected for detail display
    pub fn highlighted(&self) -> Option<&FrameResult> {
        self.summary
            .highlighted_index
            .and_then(|i| self.frames.get(i))
    }
}

/// Index of the frame to show in detail
///
/// First AI frame if any; otherwise first suspicious frame; otherwise the
/// first frame. `None` only for an empty sequence.
pub fn highlighted_index(frames: &[FrameResult]) -> Option<usize> {
    frames
        .iter()
        .position(FrameResult::is_ai)
        .or_else(|| frames.iter().position(FrameResult::is_suspicious))
        .or(if frames.is_empty() { None } else { Some(0) })
}

/// Aggregate a completed sequence of frame results
///
/// # Example
///
/// ```
/// use artifact_detect::analysis::labels::VerdictLabel;
/// use artifact_detect::analysis::result::FrameResult;
/// use artifact_detect::video::aggregator::summarize;
///
/// let frames: Vec<FrameResult> = [80, 80, 10, 10, 10]
///     .iter()
///     .enumerate()
///     .map(|(i, &p)| FrameResult { time_point: i as f64, ai_probability: p, explanation: String::new() })
///     .collect();
/// let summary = summarize(&frames);
/// assert_eq!(summary.overall_ratio, 40.0);
/// assert_eq!(summary.verdict, VerdictLabel::PossiblyManipulated);
/// ```
pub fn summarize(frames: &[FrameResult]) -> VideoSummary {
    let total_frames = frames.len();
    let ai_frames = frames.iter().filter(|f| f.is_ai()).count();
    let suspicious_frames = frames.iter().filter(|f| f.is_suspicious()).count();

    let percent = |count: usize| {
        if total_frames == 0 {
            0.0
        } else {
            count as f64 / total_frames as f64 * 100.0
        }
    };
    let overall_ratio = percent(ai_frames);

    VideoSummary {
        total_frames,
        ai_frames,
        suspicious_frames,
        ai_percentage: overall_ratio.round() as u32,
        suspicious_percentage: percent(suspicious_frames).round() as u32,
        overall_ratio,
        verdict: VerdictLabel::from_video_ratio(overall_ratio),
        highlighted_index: highlighted_index(frames),
    }
}

/// Runs an [`ImageJudge`] over sampled video frames
pub struct VideoAggregator<E, S> {
    judge: ImageJudge<E, S>,
    canvas: Option<PixelBuffer>,
}

impl<E: FeatureExtractor, S: ScoreSource> VideoAggregator<E, S> {
    /// Wrap a judge; the scratch canvas is allocated on the first run
    pub fn new(judge: ImageJudge<E, S>) -> Self {
        Self {
            judge,
            canvas: None,
        }
    }

    /// Analyze `source` at the configured sample interval
    pub async fn analyze_default<F: FrameSource + ?Sized>(
        &mut self,
        source: &mut F,
        cancel: &CancellationToken,
    ) -> Result<VideoAnalysis, DetectionError> {
        let interval = self.judge.config().sample_interval_secs;
        self.analyze(source, interval, cancel).await
    }

    /// Analyze `source`, sampling one frame every `interval_secs`
    ///
    /// The source is released on every return path.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a bad interval or an oversized sample count, and
    /// `DecodeFailure` for an unusable frame size. Per-frame failures are
    /// isolated into placeholder results.
    pub async fn analyze<F: FrameSource + ?Sized>(
        &mut self,
        source: &mut F,
        interval_secs: f64,
        cancel: &CancellationToken,
    ) -> Result<VideoAnalysis, DetectionError> {
        let duration = source.duration();
        let (points, mut canvas) =
            match self.prepare(duration, interval_secs, source.dimensions()) {
                Ok(prepared) => prepared,
                Err(e) => {
                    log::warn!("Video analysis rejected: {}", e);
                    source.release();
                    return Err(e);
                }
            };

        log::info!(
            "Analyzing video: duration={:.2}s, interval={:.2}s, {} samples at {}x{}",
            duration,
            interval_secs,
            points.len(),
            canvas.width(),
            canvas.height()
        );

        let mut frames = Vec::with_capacity(points.len());
        let mut cancelled = false;

        for time_point in points {
            if cancel.is_cancelled() {
                log::info!(
                    "Video analysis cancelled after {} frames",
                    frames.len()
                );
                cancelled = true;
                break;
            }

            let frame = match source.decode_frame(time_point, &mut canvas).await {
                Ok(()) => {
                    let verdict = self.judge.judge(&canvas, None).await;
                    FrameResult::from_verdict(time_point, &verdict)
                }
                Err(e) => {
                    let failure = DetectionError::FrameAnalysisFailure {
                        time_point,
                        reason: e.to_string(),
                    };
                    log::warn!("{}", failure);
                    FrameResult::failed(time_point)
                }
            };
            log::debug!(
                "Frame {} @ {:.2}s: {}%",
                frames.len(),
                time_point,
                frame.ai_probability
            );
            frames.push(frame);
        }

        source.release();
        self.canvas = Some(canvas);

        let summary = summarize(&frames);
        log::info!(
            "Video analysis complete: {} ({} frames, {} AI, {} suspicious)",
            summary.describe(),
            summary.total_frames,
            summary.ai_frames,
            summary.suspicious_frames
        );

        Ok(VideoAnalysis {
            frames,
            summary,
            cancelled,
        })
    }

    /// Borrow the wrapped judge
    pub fn judge(&self) -> &ImageJudge<E, S> {
        &self.judge
    }

    /// Unwrap the judge
    pub fn into_judge(self) -> ImageJudge<E, S> {
        self.judge
    }

    /// Plan sample points and size the scratch canvas
    ///
    /// Leaves the cached canvas in place on error.
    fn prepare(
        &mut self,
        duration: f64,
        interval_secs: f64,
        dimensions: (u32, u32),
    ) -> Result<(Vec<f64>, PixelBuffer), DetectionError> {
        let points = sample_points(duration, interval_secs)?;
        let (width, height) = self.frame_size(dimensions);
        let canvas = match self.canvas.take() {
            Some(mut canvas) => match canvas.reshape(width, height) {
                Ok(()) => canvas,
                Err(e) => {
                    self.canvas = Some(canvas);
                    return Err(e);
                }
            },
            None => PixelBuffer::new(width, height)?,
        };
        Ok((points, canvas))
    }

    fn frame_size(&self, (width, height): (u32, u32)) -> (u32, u32) {
        let config = self.judge.config();
        (
            if width == 0 { config.default_frame_width } else { width },
            if height == 0 { config.default_frame_height } else { height },
        )
    }
}
