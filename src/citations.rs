//! Cleanup of citation markers that Gemini leaves in exported answers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::CitationMode;

/// Marker whose presence switches on cleanup in [`CitationMode::Auto`].
pub const CITE_START: &str = "[cite_start]";

static CITE_START_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[cite_start\]").expect("valid cite_start regex"));

static CITE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[cite:\s*\d+(?:,\s*\d+)*\]").expect("valid cite regex"));

/// Remove `[cite_start]` and `[cite: 1, 2]` markers, ignoring case.
pub fn strip_citations(markdown: &str) -> String {
    let without_start = CITE_START_REGEX.replace_all(markdown, "");
    CITE_REGEX.replace_all(&without_start, "").into_owned()
}

/// Whether `mode` asks for cleanup of this particular input.
pub fn should_strip(markdown: &str, mode: CitationMode) -> bool {
    match mode {
        CitationMode::Auto => markdown.contains(CITE_START),
        CitationMode::Always => true,
        CitationMode::Never => false,
    }
}
