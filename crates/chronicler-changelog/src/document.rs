//! Parsing a changelog document back into version blocks

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use chronicler_core::{ChangelogError, HeadingStyle};
use tracing::{debug, instrument, warn};

use crate::types::{CategoryMap, ChangeItem, VersionBlock};
use crate::vocabulary::{KeepCategory, Vocabulary};

/// `## [label]` with an optional ` - YYYY-MM-DD`
static VERSION_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^## \[(?P<label>[^\]]+)\](?:[ \t]*-[ \t]*(?P<date>\d{4}-\d{2}-\d{2}))?")
        .expect("Invalid regex")
});

/// A parsed changelog document, newest block first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedChangelog {
    /// Version blocks in document order
    pub versions: Vec<VersionBlock>,
}

impl ParsedChangelog {
    /// Most recent released version (skips Unreleased)
    pub fn latest_version(&self) -> Option<&VersionBlock> {
        self.versions.iter().find(|v| !v.is_unreleased())
    }

    /// The Unreleased block
    pub fn unreleased(&self) -> Option<&VersionBlock> {
        self.versions.iter().find(|v| v.is_unreleased())
    }

    /// Block with the given label, ignoring a leading `v`
    pub fn find(&self, label: &str) -> Option<&VersionBlock> {
        let wanted = label.trim().trim_start_matches('v');
        self.versions
            .iter()
            .find(|v| v.version == wanted || v.version.eq_ignore_ascii_case(label.trim()))
    }

    /// Check if the document has no version blocks
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Total number of items across all blocks
    pub fn change_count(&self) -> usize {
        self.versions.iter().map(VersionBlock::change_count).sum()
    }

    /// Check the block layout: at most one Unreleased block, and only first
    pub fn check_structure(&self) -> Result<(), ChangelogError> {
        let positions: Vec<usize> = self
            .versions
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_unreleased())
            .map(|(i, _)| i)
            .collect();

        if positions.len() > 1 {
            return Err(ChangelogError::DuplicateUnreleased(positions.len()));
        }
        match positions.first() {
            Some(&position) if position != 0 => Err(ChangelogError::UnreleasedNotFirst(position)),
            _ => Ok(()),
        }
    }
}

/// Parser for Keep a Changelog style documents
#[derive(Debug, Clone)]
pub struct ChangelogParser {
    categories: Vec<String>,
}

impl ChangelogParser {
    /// Create a parser for the six Keep a Changelog categories
    pub fn new() -> Self {
        Self {
            categories: KeepCategory::ALL.iter().map(|c| c.as_str().to_string()).collect(),
        }
    }

    /// Create a parser for the categories a heading style writes.
    ///
    /// Keyword-style documents still get the Keep a Changelog names, after
    /// the keywords, since the Unreleased skeleton always uses them.
    pub fn for_style(style: HeadingStyle, vocabulary: &Vocabulary) -> Self {
        let mut categories = vocabulary.order(style);
        for keep in KeepCategory::ALL {
            if !categories.contains(&keep.as_str()) {
                categories.push(keep.as_str());
            }
        }
        Self::with_categories(categories)
    }

    /// Create a parser for an explicit category list
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a whole document.
    ///
    /// Every block carries every configured category, empty when the
    /// document has no such subsection. Layout problems are not errors here;
    /// see [`ParsedChangelog::check_structure`].
    #[instrument(skip(self, content), fields(len = content.len()))]
    pub fn parse(&self, content: &str) -> ParsedChangelog {
        let headers: Vec<_> = VERSION_HEADER_REGEX.captures_iter(content).collect();
        let mut versions = Vec::with_capacity(headers.len());

        for (i, caps) in headers.iter().enumerate() {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let end = headers
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(content.len());
            let raw = &content[whole.start()..end];

            let version = caps.name("label").map(|m| m.as_str().trim()).unwrap_or_default();
            let date = caps.name("date").and_then(|m| {
                NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d")
                    .map_err(|e| {
                        warn!(version, date = m.as_str(), error = %e, "ignoring invalid date")
                    })
                    .ok()
            });

            let mut categories = CategoryMap::new();
            for category in &self.categories {
                let items = category_body(raw, category)
                    .map(parse_category_items)
                    .unwrap_or_default();
                categories.extend(category, items);
            }

            debug!(version, items = categories.total_items(), "parsed version block");
            versions.push(VersionBlock {
                version: version.to_string(),
                date,
                categories,
                raw: raw.to_string(),
            });
        }

        ParsedChangelog { versions }
    }
}

impl Default for ChangelogParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a document using the Keep a Changelog categories
pub fn parse_changelog(content: &str) -> ParsedChangelog {
    ChangelogParser::new().parse(content)
}

/// Text under the first `### <category>` heading of a block, up to the next
/// `###` heading or version header
fn category_body(block: &str, category: &str) -> Option<String> {
    let heading = format!("### {}", category).to_lowercase();
    let mut lines = block.lines();

    lines.by_ref().find(|line| line.trim_end().to_lowercase() == heading)?;

    let body: Vec<&str> = lines
        .take_while(|line| {
            let line = line.trim_start();
            !(line.starts_with("###") || line.starts_with("## ["))
        })
        .collect();
    Some(body.join("\n"))
}

/// Split a category body into items.
///
/// `- ` opens an item; following non-blank lines that are not bullets or
/// headings continue it, joined by a space; a blank line closes it.
fn parse_category_items(body: String) -> Vec<ChangeItem> {
    let mut items = Vec::new();
    let mut current: Option<String> = None;

    for line in body.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if let Some(item) = current.take() {
                items.push(item);
            }
            continue;
        }

        if let Some(text) = trimmed.strip_prefix("- ") {
            if let Some(item) = current.replace(text.to_string()) {
                items.push(item);
            }
        } else if !trimmed.starts_with('#') && !trimmed.starts_with('-') {
            if let Some(item) = current.as_mut() {
                item.push(' ');
                item.push_str(trimmed);
            }
        }
    }

    if let Some(item) = current {
        items.push(item);
    }

    items
        .into_iter()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .map(ChangeItem::new)
        .collect()
}
