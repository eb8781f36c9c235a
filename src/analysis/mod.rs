//! Judgment and result modules
//!
//! Turns artifact scores into verdicts:
//! - Filename test-pattern overrides
//! - Verdict labels and thresholds
//! - Result types
//! - The single-image judge

pub mod judge;
pub mod labels;
pub mod overrides;
pub mod result;
