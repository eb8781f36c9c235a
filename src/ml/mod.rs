//! Model inference boundary
//!
//! Trait for the external feature extractor plus a no-op implementation.

pub mod extractor;

pub use extractor::{FeatureExtractor, FeatureVector, PassthroughExtractor};
