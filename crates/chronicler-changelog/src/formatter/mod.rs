//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use chrono::NaiveDate;

use crate::types::{CategoryMap, VersionBlock};

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format merged release changes as a `## [version]` block
    fn format_release(
        &self,
        changes: &CategoryMap,
        version: &str,
        date: Option<NaiveDate>,
    ) -> String;

    /// Format a version block, e.g. one recovered by the document parser
    fn format_version(&self, block: &VersionBlock) -> String;
}
