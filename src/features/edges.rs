//! Edge-pattern score
//!
//! No edge detector runs here. The score is a uniform random base term in
//! [0, 0.5] plus a deterministic penalty for distance of the aspect ratio from
//! the golden ratio. Because of the random term the score is NOT reproducible
//! unless the [`ScoreSource`] is pinned.

use super::random::ScoreSource;

/// Golden ratio reference for the aspect-ratio term
pub const GOLDEN_RATIO: f64 = 1.618;

/// Upper bound of the random base term
const BASE_RANGE: f64 = 0.5;

/// Weight of the aspect-ratio term
const ASPECT_WEIGHT: f64 = 0.3;

/// Relative distance of `width / height` from the golden ratio
pub fn golden_ratio_distance(width: u32, height: u32) -> f64 {
    let aspect = width as f64 / height as f64;
    (aspect - GOLDEN_RATIO).abs() / GOLDEN_RATIO
}

/// Score edge patterns in [0, 1]
///
/// Draws exactly one value from `source`.
pub fn edge_pattern_score<S: ScoreSource + ?Sized>(width: u32, height: u32, source: &mut S) -> f64 {
    let base = source.unit() * BASE_RANGE;
    let aspect_term = golden_ratio_distance(width, height) * ASPECT_WEIGHT;
    (base + aspect_term).clamp(0.0, 1.0)
}
