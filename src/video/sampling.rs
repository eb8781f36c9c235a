//! Sample-point planning
//!
//! Frames are sampled at `t = 0, interval, 2 * interval, ...`. The number of
//! samples is `floor(duration / interval)` with a minimum of one, so clips
//! shorter than one interval still get a frame at `t = 0`.

use crate::error::DetectionError;

/// Upper bound on samples per run (about 28 hours at one frame per second)
pub const MAX_SAMPLES: usize = 100_000;

/// Number of frames to sample
///
/// Unknown (non-finite) or negative durations count as zero. Ratios past
/// `usize::MAX` saturate.
pub fn sample_count(duration: f64, interval: f64) -> usize {
    let duration = if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    };
    ((duration / interval).floor() as usize).max(1)
}

/// Sample times in seconds, ascending
///
/// # Errors
///
/// `InvalidInput` if `interval` is not a positive finite number, or if the
/// duration would need more than [`MAX_SAMPLES`] samples.
///
/// # Example
///
/// ```
/// use artifact_detect::video::sampling::sample_points;
///
/// assert_eq!(sample_points(5.0, 1.0)?, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(sample_points(0.4, 1.0)?, vec![0.0]);
/// # Ok::<(), artifact_detect::DetectionError>(())
/// ```
pub fn sample_points(duration: f64, interval: f64) -> Result<Vec<f64>, DetectionError> {
    if !(interval.is_finite() && interval > 0.0) {
        return Err(DetectionError::InvalidInput(format!(
            "sample interval must be positive, got {}",
            interval
        )));
    }
    let count = sample_count(duration, interval);
    if count > MAX_SAMPLES {
        return Err(DetectionError::InvalidInput(format!(
            "{:.0}s at {}s intervals needs {} samples, limit is {}",
            duration, interval, count, MAX_SAMPLES
        )));
    }
    Ok((0..count).map(|i| i as f64 * interval).collect())
}
