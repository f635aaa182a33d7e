//! Splitting an aggregated release body into per-contribution sections

use regex::Regex;
use std::sync::LazyLock;

/// A line consisting of exactly `---`, with either line ending
static DELIMITER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^---\r?$").expect("Invalid regex"));

/// `### PR: <title>` line naming the contribution
static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"###\s*PR:\s*(?P<title>[^\n]+)").expect("Invalid regex"));

/// One contribution's slice of the release body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// Position among the non-empty sections
    pub index: usize,
    /// Section text, surrounding newlines included
    pub body: &'a str,
}

impl<'a> Section<'a> {
    /// Contribution title from a `### PR:` line, if any
    pub fn title(&self) -> Option<&'a str> {
        TITLE_REGEX
            .captures(self.body)
            .and_then(|caps| caps.name("title"))
            .map(|m| m.as_str().trim())
            .filter(|t| !t.is_empty())
    }
}

/// Split a release body on `---` lines.
///
/// Sections that are empty or whitespace-only are dropped; the rest keep
/// their order and their text untouched, so concatenating them gives back
/// the body minus the delimiter lines.
pub fn split_sections(body: &str) -> Vec<Section<'_>> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    DELIMITER_REGEX
        .split(body)
        .filter(|part| !part.trim().is_empty())
        .enumerate()
        .map(|(index, body)| Section { index, body })
        .collect()
}
