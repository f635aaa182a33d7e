//! Category parsing strategies
//!
//! Each strategy reads one extracted summary block and returns the
//! categories it recognized. Strategies are selected explicitly by
//! [`Dialect`]; they are never mixed or auto-detected within one run.

mod emoji;
mod keyword;

pub use emoji::{EmojiFlatParser, EmojiTitledParser};
pub use keyword::KeywordParser;

use std::sync::Arc;

use chronicler_core::Dialect;

use crate::types::CategoryMap;
use crate::vocabulary::Vocabulary;

/// Trait for summary parsers
pub trait SummaryParser: Send + Sync {
    /// Parse one summary block into categories.
    ///
    /// Categories that end up with no items are left out.
    fn parse(&self, summary: &str) -> CategoryMap;

    /// Dialect this parser understands
    fn dialect(&self) -> Dialect;
}

/// Build the parser for a dialect
pub fn parser_for(dialect: Dialect, vocabulary: Arc<Vocabulary>) -> Box<dyn SummaryParser> {
    match dialect {
        Dialect::Keyword => Box::new(KeywordParser::new(vocabulary)),
        Dialect::EmojiFlat => Box::new(EmojiFlatParser::new(vocabulary)),
        Dialect::EmojiTitled => Box::new(EmojiTitledParser::new(vocabulary)),
    }
}
