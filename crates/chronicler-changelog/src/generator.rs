//! Changelog generation

use std::sync::Arc;

use chrono::NaiveDate;
use chronicler_core::config::ChangelogConfig;
use chronicler_core::HeadingStyle;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::document::{ChangelogParser, ParsedChangelog};
use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::merge::{merge, MergedChanges};
use crate::parser::{parser_for, SummaryParser};
use crate::sections::split_sections;
use crate::summary::SummaryExtractor;
use crate::types::{CategoryCount, VersionBlock};
use crate::updater::{DocumentUpdater, InsertionStrategy};
use crate::vocabulary::Vocabulary;

/// Title used for sections without a `### PR:` line
pub const UNKNOWN_SECTION_TITLE: &str = "Unknown PR";

/// What happened to one section of the release text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    /// Position among the non-empty sections
    pub index: usize,
    /// Contribution title
    pub title: String,
    /// Whether a summary block was found
    pub has_summary: bool,
    /// Items recognized in the summary
    pub items: usize,
}

/// Result of running release text through the extraction pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Synthesis {
    /// Merged categories
    pub merged: MergedChanges,
    /// Per-section outcome, in processing order
    pub sections: Vec<SectionReport>,
}

impl Synthesis {
    /// Number of sections that carried a summary
    pub fn sections_with_summary(&self) -> usize {
        self.sections.iter().filter(|s| s.has_summary).count()
    }
}

/// Summary of one document update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    /// Version written
    pub version: String,
    /// Release date written
    pub date: Option<NaiveDate>,
    /// Items written
    pub total_items: usize,
    /// Items per category
    pub categories: Vec<CategoryCount>,
    /// How the block was placed
    pub strategy: InsertionStrategy,
    /// Sections in the release text
    pub sections_found: usize,
    /// Sections that carried a summary
    pub sections_with_summary: usize,
    /// Rendered release block
    pub block: String,
    /// Updated document
    #[serde(skip)]
    pub content: String,
}

/// Changelog generator
pub struct ChangelogGenerator {
    vocabulary: Arc<Vocabulary>,
    extractor: SummaryExtractor,
    parser: Box<dyn SummaryParser>,
    formatter: Box<dyn ChangelogFormatter>,
    updater: DocumentUpdater,
    heading_style: HeadingStyle,
}

impl ChangelogGenerator {
    /// Create a generator with the standard vocabulary
    pub fn new(config: &ChangelogConfig) -> Self {
        Self::with_vocabulary(config, Vocabulary::new())
    }

    /// Create a generator around a custom vocabulary
    pub fn with_vocabulary(config: &ChangelogConfig, vocabulary: Vocabulary) -> Self {
        let vocabulary = Arc::new(vocabulary);
        let formatter = MarkdownFormatter::new(vocabulary.clone())
            .with_heading_style(config.heading_style)
            .with_default_category(&config.default_category);

        Self {
            extractor: SummaryExtractor::from_config(&config.summary),
            parser: parser_for(config.dialect, vocabulary.clone()),
            formatter: Box::new(formatter),
            updater: DocumentUpdater::new(),
            heading_style: config.heading_style,
            vocabulary,
        }
    }

    /// Use a custom parser
    pub fn with_parser<P: SummaryParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// The vocabulary shared by every stage
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Split release text, extract each summary, parse and merge.
    ///
    /// Sections without a summary are skipped and only show up in the
    /// section reports.
    #[instrument(skip_all, fields(body_len = body.len(), dialect = %self.parser.dialect()))]
    pub fn synthesize(&self, body: &str) -> Synthesis {
        let sections = split_sections(body);
        info!(section_count = sections.len(), "processing release sections");

        let mut reports = Vec::with_capacity(sections.len());
        let mut parsed = Vec::new();

        for section in &sections {
            let title = section.title().unwrap_or(UNKNOWN_SECTION_TITLE);

            let Some(summary) = self.extractor.extract(section.body) else {
                warn!(index = section.index, title, "no summary found in section");
                reports.push(SectionReport {
                    index: section.index,
                    title: title.to_string(),
                    has_summary: false,
                    items: 0,
                });
                continue;
            };

            let categories = self.parser.parse(summary);
            debug!(
                index = section.index,
                title,
                categories = categories.len(),
                items = categories.total_items(),
                "section parsed"
            );

            reports.push(SectionReport {
                index: section.index,
                title: title.to_string(),
                has_summary: true,
                items: categories.total_items(),
            });
            parsed.push(categories);
        }

        let merged = merge(parsed);
        info!(
            total = merged.total,
            categories = merged.categories.len(),
            "release changes merged"
        );

        Synthesis {
            merged,
            sections: reports,
        }
    }

    /// Render merged changes as a release block
    pub fn render(&self, synthesis: &Synthesis, version: &str, date: Option<NaiveDate>) -> String {
        self.formatter
            .format_release(&synthesis.merged.categories, version, date)
    }

    /// Run the full write path against an in-memory document
    #[instrument(skip(self, document, body), fields(document_len = document.len()))]
    pub fn update_document(
        &self,
        document: &str,
        body: &str,
        version: &str,
        date: Option<NaiveDate>,
    ) -> UpdateReport {
        let synthesis = self.synthesize(body);
        let block = self.render(&synthesis, version, date);
        let outcome = self.updater.update(document, &block);

        info!(
            version,
            strategy = %outcome.strategy,
            items = synthesis.merged.total,
            "changelog updated"
        );

        UpdateReport {
            version: version.to_string(),
            date,
            total_items: synthesis.merged.total,
            categories: synthesis.merged.counts.clone(),
            strategy: outcome.strategy,
            sections_found: synthesis.sections.len(),
            sections_with_summary: synthesis.sections_with_summary(),
            block,
            content: outcome.content,
        }
    }

    /// Parse a document written with this generator's heading style
    pub fn parse_document(&self, content: &str) -> ParsedChangelog {
        ChangelogParser::for_style(self.heading_style, &self.vocabulary).parse(content)
    }

    /// Render a parsed version block back to markdown
    pub fn render_version(&self, block: &VersionBlock) -> String {
        self.formatter.format_version(block)
    }
}
