//! Inserting a rendered release block into a changelog document

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use tracing::{debug, instrument, warn};

use crate::vocabulary::{KeepCategory, UNRELEASED};

static UNRELEASED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## \[Unreleased\]").expect("Invalid regex"));

/// Header of a numbered release
static RELEASE_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## \[\d").expect("Invalid regex"));

/// How a block was placed into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertionStrategy {
    /// Between the reset Unreleased section and the previous release
    Interior,
    /// Unreleased was the last section and was replaced to the end
    Trailing,
    /// No Unreleased section; appended at the end
    Append,
}

impl InsertionStrategy {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interior => "interior",
            Self::Trailing => "trailing",
            Self::Append => "append",
        }
    }
}

impl fmt::Display for InsertionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Updated document and the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Full document text after the update
    pub content: String,
    /// Strategy that matched
    pub strategy: InsertionStrategy,
}

/// Places release blocks after the Unreleased section
#[derive(Debug, Clone)]
pub struct DocumentUpdater {
    skeleton: String,
}

impl DocumentUpdater {
    /// Create an updater that resets Unreleased to one empty subsection per
    /// Keep a Changelog category
    pub fn new() -> Self {
        let mut skeleton = format!("## [{}]\n\n", UNRELEASED);
        for category in KeepCategory::ALL {
            skeleton.push_str(&format!("### {}\n\n", category));
        }
        Self { skeleton }
    }

    /// The empty Unreleased section written back by every update
    pub fn skeleton(&self) -> &str {
        &self.skeleton
    }

    /// Insert `block` (a rendered `## [version]` section) into `document`.
    ///
    /// Strategies are tried in order: interior, trailing, append. Append
    /// leaves the existing text byte-identical and only adds the separator
    /// needed for one blank line before the block.
    #[instrument(skip_all, fields(document_len = document.len(), block_len = block.len()))]
    pub fn update(&self, document: &str, block: &str) -> UpdateOutcome {
        let block = block.trim_end_matches('\n');

        let Some(unreleased) = UNRELEASED_REGEX.find(document) else {
            warn!("no Unreleased section, appending release at end of document");
            let separator = match document {
                "" => "",
                d if d.ends_with("\n\n") => "",
                d if d.ends_with('\n') => "\n",
                _ => "\n\n",
            };
            return UpdateOutcome {
                content: format!("{}{}{}\n", document, separator, block),
                strategy: InsertionStrategy::Append,
            };
        };

        let head = &document[..unreleased.start()];

        if let Some(next) = RELEASE_HEADER_REGEX.find_at(document, unreleased.end()) {
            debug!(offset = next.start(), "inserting before previous release");
            return UpdateOutcome {
                content: format!(
                    "{}{}{}\n\n{}",
                    head,
                    self.skeleton,
                    block,
                    &document[next.start()..]
                ),
                strategy: InsertionStrategy::Interior,
            };
        }

        debug!("Unreleased is the last section, replacing to end of document");
        UpdateOutcome {
            content: format!("{}{}{}\n", head, self.skeleton, block),
            strategy: InsertionStrategy::Trailing,
        }
    }
}

impl Default for DocumentUpdater {
    fn default() -> Self {
        Self::new()
    }
}
