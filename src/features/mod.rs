//! Artifact feature extraction modules
//!
//! Heuristic sub-scores computed from raw pixels:
//! - Color-distribution uniformity
//! - Edge patterns (random base + aspect ratio)
//! - Facial-anomaly and texture placeholders
//! - Injectable random source
//! - Scorer combining the four into [`scorer::ArtifactScores`]

pub mod color;
pub mod edges;
pub mod placeholders;
pub mod random;
pub mod scorer;

pub use random::{FixedSource, ScoreSource, SeededSource};
pub use scorer::{ArtifactScorer, ArtifactScores};
