//! Markdown changelog formatter

use std::sync::Arc;

use chrono::NaiveDate;
use chronicler_core::HeadingStyle;
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::{CategoryMap, ChangeItem, VersionBlock};
use crate::vocabulary::Vocabulary;

/// Markdown changelog formatter
pub struct MarkdownFormatter {
    vocabulary: Arc<Vocabulary>,
    /// Heading names to write
    pub heading_style: HeadingStyle,
    /// Category of the placeholder entry for empty releases
    pub default_category: String,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self {
            vocabulary,
            heading_style: HeadingStyle::default(),
            default_category: "Changes".to_string(),
        }
    }

    /// Set the heading style
    pub fn with_heading_style(mut self, style: HeadingStyle) -> Self {
        self.heading_style = style;
        self
    }

    /// Set the placeholder category
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    /// Render the category sections of a release, without the version header.
    ///
    /// Each non-empty category becomes a blank line, `### <Category>`, a
    /// blank line and one bullet per item. With nothing to show, a single
    /// `- Release <version>` entry is written under the default category.
    pub fn format_changes(&self, changes: &CategoryMap, version: &str) -> String {
        let categories = match self.heading_style {
            HeadingStyle::Keyword => changes.without_empty(),
            HeadingStyle::KeepAChangelog => {
                self.vocabulary.to_keep_a_changelog(changes).without_empty()
            }
        };

        if categories.total_items() == 0 {
            return format!("\n### {}\n\n- Release {}\n", self.default_category, version);
        }

        let mut output = String::new();
        for (category, items) in self.ordered(&categories) {
            output.push_str(&format!("\n### {}\n\n", category));
            for item in items {
                output.push_str(&render_item(item));
            }
        }
        output
    }

    /// Categories in canonical order, unknown ones after in encounter order
    fn ordered<'a>(&self, categories: &'a CategoryMap) -> Vec<(&'a str, &'a [ChangeItem])> {
        let order = self.vocabulary.order(self.heading_style);

        let mut ordered: Vec<(&str, &[ChangeItem])> = order
            .iter()
            .filter_map(|name| categories.iter().find(|(label, _)| label == name))
            .collect();
        ordered.extend(categories.iter().filter(|(label, _)| !order.contains(label)));
        ordered
    }
}

fn version_header(version: &str, date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("## [{}] - {}", version, date.format("%Y-%m-%d")),
        None => format!("## [{}]", version),
    }
}

/// Bullet lines for one item.
///
/// Every item gets its own `- ` bullet, even one whose text already starts
/// with a dash. Titled items put each body line in its own indented
/// paragraph under the title.
fn render_item(item: &ChangeItem) -> String {
    let mut output = String::new();

    match &item.title {
        Some(title) => {
            output.push_str(&format!("- {}\n", title));
            for line in &item.lines {
                output.push_str(&format!("\n  {}\n", line));
            }
        }
        None => {
            let mut lines = item.lines.iter();
            if let Some(first) = lines.next() {
                output.push_str(&format!("- {}\n", first));
            }
            for line in lines {
                output.push_str(&format!("  {}\n", line));
            }
        }
    }

    output
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, changes), fields(category_count = changes.len()))]
    fn format_release(
        &self,
        changes: &CategoryMap,
        version: &str,
        date: Option<NaiveDate>,
    ) -> String {
        let mut output = version_header(version, date);
        output.push('\n');
        output.push_str(&self.format_changes(changes, version));

        debug!(output_len = output.len(), "release block formatted");
        output
    }

    fn format_version(&self, block: &VersionBlock) -> String {
        let mut output = version_header(&block.version, block.date);
        output.push_str("\n\n");

        let categories = block.categories.without_empty();
        for (category, items) in self.ordered(&categories) {
            output.push_str(&format!("### {}\n\n", category));
            for item in items {
                output.push_str(&render_item(item));
            }
            output.push('\n');
        }

        output
    }
}
