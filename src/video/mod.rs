//! Video analysis modules
//!
//! - Frame source boundary (seek + decode into a scratch canvas)
//! - Sample-point planning
//! - Per-frame judging and aggregation

pub mod aggregator;
pub mod sampling;
pub mod source;

pub use aggregator::{VideoAggregator, VideoAnalysis};
pub use source::{FrameSequence, FrameSource};
