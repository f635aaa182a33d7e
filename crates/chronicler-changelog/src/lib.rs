//! Chronicler Changelog - release-note extraction and changelog maintenance
//!
//! The write path turns aggregated release text into a dated changelog
//! block: [`sections`] splits the text per contribution, [`summary`] isolates
//! each embedded summary, [`parser`] recognizes categories in one of the
//! supported dialects, [`merge`] combines them, [`formatter`] renders the
//! block and [`updater`] places it in the document. The read path,
//! [`document`], parses a changelog back into version blocks.
//! [`ChangelogGenerator`] wires the write path together.

pub mod document;
pub mod formatter;
pub mod generator;
pub mod merge;
pub mod parser;
pub mod sections;
pub mod summary;
pub mod types;
pub mod updater;
pub mod vocabulary;

pub use document::{parse_changelog, ChangelogParser, ParsedChangelog};
pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use generator::{ChangelogGenerator, SectionReport, Synthesis, UpdateReport};
pub use merge::{merge, MergedChanges};
pub use parser::{parser_for, SummaryParser};
pub use sections::{split_sections, Section};
pub use summary::SummaryExtractor;
pub use types::{CategoryCount, CategoryMap, ChangeItem, VersionBlock};
pub use updater::{DocumentUpdater, InsertionStrategy, UpdateOutcome};
pub use vocabulary::{KeepCategory, Vocabulary, UNRELEASED};
