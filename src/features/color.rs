//! Color-distribution uniformity score
//!
//! Algorithm:
//! 1. Bucket every pixel by mean brightness `(r + g + b) / 3` into 8 bins of width 32
//! 2. Sum the absolute deviation of each bin from the uniform expectation `N / 8`
//! 3. `uniformity = 1 - deviation / (2N)`, scaled by 1.5 and clamped to [0, 1]
//!
//! Flat histograms score high. This is a weak heuristic, not a trained signal.

use crate::io::PixelBuffer;

/// Number of brightness bins
pub const BRIGHTNESS_BINS: usize = 8;

/// Width of one brightness bin on the 0-255 scale
const BIN_WIDTH: f64 = 32.0;

/// Gain applied to the uniformity before clamping
const UNIFORMITY_GAIN: f64 = 1.5;

/// Brightness histogram with [`BRIGHTNESS_BINS`] bins
pub fn brightness_histogram(pixels: &PixelBuffer) -> [usize; BRIGHTNESS_BINS] {
    let mut bins = [0usize; BRIGHTNESS_BINS];
    for [r, g, b, _] in pixels.pixels() {
        let brightness = (r as f64 + g as f64 + b as f64) / 3.0;
        let idx = ((brightness / BIN_WIDTH) as usize).min(BRIGHTNESS_BINS - 1);
        bins[idx] += 1;
    }
    bins
}

/// Score brightness-histogram uniformity in [0, 1]
///
/// # Example
///
/// ```
/// use artifact_detect::features::color::color_distribution_score;
/// use artifact_detect::io::PixelBuffer;
///
/// // A single flat color lands in one bin: uniformity 0.125, scaled by 1.5
/// let flat = PixelBuffer::filled(8, 8, [128, 128, 128, 255])?;
/// assert!((color_distribution_score(&flat) - 0.1875).abs() < 1e-9);
/// # Ok::<(), artifact_detect::DetectionError>(())
/// ```
pub fn color_distribution_score(pixels: &PixelBuffer) -> f64 {
    let bins = brightness_histogram(pixels);
    let total = pixels.pixel_count() as f64;
    let expected = total / BRIGHTNESS_BINS as f64;

    let deviation: f64 = bins.iter().map(|&c| (c as f64 - expected).abs()).sum();
    let uniformity = (1.0 - deviation / (2.0 * total)).clamp(0.0, 1.0);

    log::debug!(
        "Color distribution: bins={:?}, deviation={:.1}, uniformity={:.3}",
        bins,
        deviation,
        uniformity
    );

    (uniformity * UNIFORMITY_GAIN).clamp(0.0, 1.0)
}
