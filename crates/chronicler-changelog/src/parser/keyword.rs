//! Keyword dialect parser
//!
//! Recognizes category headers written as `* **Bug Fixes**`, `### Bug Fixes`
//! (or `## Bug Fixes`) and `**Bug Fixes**`, case-insensitively. Plain lines
//! below a header become items of that category.

use regex::Regex;
use std::sync::{Arc, LazyLock};

use chronicler_core::Dialect;
use tracing::trace;

use super::SummaryParser;
use crate::types::{CategoryMap, ChangeItem};
use crate::vocabulary::Vocabulary;

/// `* **Label**`
static BULLET_BOLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\s*\*\*(?P<label>.+?)\*\*").expect("Invalid regex"));

/// `## Label` or `### Label`
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^###?\s*(?P<rest>.*)$").expect("Invalid regex"));

/// `**Label**`
static BARE_BOLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(?P<label>.+?)\*\*").expect("Invalid regex"));

/// Parser for bolded/heading keyword summaries
pub struct KeywordParser {
    vocabulary: Arc<Vocabulary>,
}

impl KeywordParser {
    /// Create a parser over a vocabulary
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }

    /// Keyword named by a header line, if the trimmed line is one
    fn match_header(&self, line: &str) -> Option<&str> {
        let bold = BULLET_BOLD_REGEX
            .captures(line)
            .or_else(|| BARE_BOLD_REGEX.captures(line))
            .and_then(|caps| caps.name("label"));
        if let Some(keyword) =
            bold.and_then(|label| self.vocabulary.canonical_keyword(label.as_str()))
        {
            return Some(keyword);
        }

        let rest = HEADING_REGEX.captures(line)?.name("rest")?.as_str().to_lowercase();
        self.vocabulary
            .keywords()
            .find(|keyword| rest.starts_with(&keyword.to_lowercase()))
    }
}

/// Drop one leading `-` or `•` bullet and the whitespace after it
fn strip_bullet(line: &str) -> &str {
    line.strip_prefix('-')
        .or_else(|| line.strip_prefix('•'))
        .map(str::trim_start)
        .unwrap_or(line)
}

impl SummaryParser for KeywordParser {
    fn parse(&self, summary: &str) -> CategoryMap {
        let mut categories = CategoryMap::new();
        let mut current: Option<&str> = None;

        for line in summary.lines() {
            let trimmed = line.trim();

            if let Some(keyword) = self.match_header(trimmed) {
                trace!(keyword, "category header");
                categories.ensure(keyword);
                current = Some(keyword);
                continue;
            }

            let Some(category) = current else {
                continue;
            };

            if trimmed.is_empty() || trimmed.starts_with('*') || trimmed.starts_with('#') {
                continue;
            }

            let cleaned = strip_bullet(trimmed).trim();
            if !cleaned.is_empty() {
                categories.push(category, ChangeItem::new(cleaned));
            }
        }

        categories.without_empty()
    }

    fn dialect(&self) -> Dialect {
        Dialect::Keyword
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> KeywordParser {
        KeywordParser::new(Arc::new(Vocabulary::new()))
    }

    fn texts(map: &CategoryMap, category: &str) -> Vec<String> {
        map.get(category)
            .unwrap_or_default()
            .iter()
            .map(ChangeItem::text)
            .collect()
    }

    #[test]
    fn test_bullet_bold_header() {
        let map = parser().parse("* **Bug Fixes**\nFix crash\n- Fix leak");
        assert_eq!(texts(&map, "Bug Fixes"), vec!["Fix crash", "Fix leak"]);
    }

    #[test]
    fn test_heading_headers() {
        let map = parser().parse("### New Features\n• Dark mode\n## Tests\n-Add e2e suite");
        assert_eq!(texts(&map, "New Features"), vec!["Dark mode"]);
        assert_eq!(texts(&map, "Tests"), vec!["Add e2e suite"]);
    }

    #[test]
    fn test_bare_bold_header_is_case_insensitive() {
        let map = parser().parse("**bug fixes**\nFix crash");
        assert_eq!(texts(&map, "Bug Fixes"), vec!["Fix crash"]);
    }

    #[test]
    fn test_lines_before_header_are_ignored() {
        let map = parser().parse("Some intro text\n\n* **Chores**\nBump deps");
        assert_eq!(map.len(), 1);
        assert_eq!(texts(&map, "Chores"), vec!["Bump deps"]);
    }

    #[test]
    fn test_star_and_hash_lines_are_not_content() {
        let summary = "* **New Features**\n  * Nested star item\n#### Deep heading\nReal item";
        let map = parser().parse(summary);
        assert_eq!(texts(&map, "New Features"), vec!["Real item"]);
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let map = parser().parse("* **Bug Fixes**\n\n* **Documentation**\nUpdate README");
        assert!(!map.contains("Bug Fixes"));
        assert_eq!(texts(&map, "Documentation"), vec!["Update README"]);
    }

    #[test]
    fn test_repeated_header_appends_to_same_category() {
        let map = parser().parse("* **Bug Fixes**\nOne\n* **Tests**\nTwo\n* **Bug Fixes**\nThree");
        assert_eq!(texts(&map, "Bug Fixes"), vec!["One", "Three"]);
        assert_eq!(map.categories().collect::<Vec<_>>(), vec!["Bug Fixes", "Tests"]);
    }

    #[test]
    fn test_unknown_header_does_not_change_category() {
        let map = parser().parse("* **Bug Fixes**\nOne\n**Walkthrough**\nTwo");
        assert_eq!(texts(&map, "Bug Fixes"), vec!["One", "Two"]);
    }

    #[test]
    fn test_bullet_only_line_is_skipped() {
        let map = parser().parse("* **Security**\n- \n-   Patch CVE");
        assert_eq!(texts(&map, "Security"), vec!["Patch CVE"]);
    }
}
