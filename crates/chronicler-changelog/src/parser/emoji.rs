//! Emoji dialect parsers
//!
//! Release-drafter style text labels categories with an emoji phrase such as
//! `🐛 Bug Fixes`. Two layouts exist under those headers: a flat list of
//! `- ` lines, and titled entries each opened by a `### ` line.

use std::sync::Arc;

use chronicler_core::Dialect;
use tracing::{debug, trace};

use super::SummaryParser;
use crate::types::{CategoryMap, ChangeItem};
use crate::vocabulary::Vocabulary;

/// Parser for emoji headers followed by `- ` lines
pub struct EmojiFlatParser {
    vocabulary: Arc<Vocabulary>,
}

impl EmojiFlatParser {
    /// Create a parser over a vocabulary
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }
}

impl SummaryParser for EmojiFlatParser {
    fn parse(&self, summary: &str) -> CategoryMap {
        let mut categories = CategoryMap::new();
        let mut current: Option<&str> = None;

        for line in summary.lines() {
            let line = line.trim_end();

            if let Some(keyword) = self.vocabulary.keyword_for_emoji_line(line) {
                trace!(keyword, "emoji category header");
                categories.ensure(keyword);
                current = Some(keyword);
                continue;
            }

            if let Some(category) = current {
                if line.starts_with("- ") {
                    // kept verbatim, bullet included
                    categories.push(category, ChangeItem::new(line));
                }
            }
        }

        categories.without_empty()
    }

    fn dialect(&self) -> Dialect {
        Dialect::EmojiFlat
    }
}

/// Parser for emoji headers followed by `### Title` entries
pub struct EmojiTitledParser {
    vocabulary: Arc<Vocabulary>,
}

impl EmojiTitledParser {
    /// Create a parser over a vocabulary
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }
}

impl SummaryParser for EmojiTitledParser {
    fn parse(&self, summary: &str) -> CategoryMap {
        let mut categories = CategoryMap::new();
        let mut current: Option<&str> = None;
        let mut entry: Option<ChangeItem> = None;

        for line in summary.lines() {
            let trimmed = line.trim();

            if let Some(keyword) = self.vocabulary.keyword_for_emoji_line(trimmed) {
                if let (Some(category), Some(item)) = (current, entry.take()) {
                    categories.push(category, item);
                }
                categories.ensure(keyword);
                current = Some(keyword);
                continue;
            }

            let Some(category) = current else {
                continue;
            };

            if let Some(title) = trimmed.strip_prefix("### ") {
                if let Some(item) = entry.take() {
                    categories.push(category, item);
                }
                entry = Some(ChangeItem::titled(title.trim()));
            } else if !trimmed.is_empty() {
                match entry.as_mut() {
                    Some(item) => item.push_line(trimmed),
                    None => debug!(category, line = trimmed, "body line outside any entry ignored"),
                }
            }
        }

        if let (Some(category), Some(item)) = (current, entry) {
            categories.push(category, item);
        }

        categories.without_empty()
    }

    fn dialect(&self) -> Dialect {
        Dialect::EmojiTitled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Arc<Vocabulary> {
        Arc::new(Vocabulary::new())
    }

    #[test]
    fn test_flat_keeps_lines_verbatim() {
        let summary = "## 🐛 Bug Fixes\n- Fix crash (#12)\n- Fix leak\n\n## 🚀 New Features\n- Dark mode";
        let map = EmojiFlatParser::new(vocabulary()).parse(summary);

        let fixes: Vec<String> = map
            .get("Bug Fixes")
            .unwrap()
            .iter()
            .map(ChangeItem::text)
            .collect();
        assert_eq!(fixes, vec!["- Fix crash (#12)", "- Fix leak"]);
        assert_eq!(map.get("New Features").unwrap().len(), 1);
    }

    #[test]
    fn test_flat_ignores_non_bullet_lines() {
        let summary = "Intro\n- before any header\n## 🔧 Chores\nplain text\n  - indented\n* star\n- Bump deps";
        let map = EmojiFlatParser::new(vocabulary()).parse(summary);

        assert_eq!(map.len(), 1);
        let chores = map.get("Chores").unwrap();
        assert_eq!(chores.len(), 1);
        assert_eq!(chores[0].text(), "- Bump deps");
    }

    #[test]
    fn test_flat_header_without_items_is_omitted() {
        let map = EmojiFlatParser::new(vocabulary())
            .parse("## 📝 Documentation\n\n## ✅ Tests\n- Add tests");
        assert!(!map.contains("Documentation"));
        assert!(map.contains("Tests"));
    }

    #[test]
    fn test_titled_entries() {
        let summary = "\
## 🚀 New Features
### Dark mode
Adds a theme toggle.

Respects the OS setting.
### Export
CSV export from the table view.
## 🐛 Bug Fixes
### Crash on empty input
";
        let map = EmojiTitledParser::new(vocabulary()).parse(summary);

        let features = map.get("New Features").unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].title.as_deref(), Some("Dark mode"));
        assert_eq!(
            features[0].lines,
            vec!["Adds a theme toggle.", "Respects the OS setting."]
        );
        assert_eq!(features[1].title.as_deref(), Some("Export"));

        let fixes = map.get("Bug Fixes").unwrap();
        assert_eq!(fixes.len(), 1);
        assert!(fixes[0].lines.is_empty());
    }

    #[test]
    fn test_titled_ignores_body_before_first_entry() {
        let summary = "## 🔒 Security\nstray text\n### Patch CVE-2024-0001\nUpgrade openssl";
        let map = EmojiTitledParser::new(vocabulary()).parse(summary);

        let security = map.get("Security").unwrap();
        assert_eq!(security.len(), 1);
        assert_eq!(security[0].text(), "Patch CVE-2024-0001 Upgrade openssl");
    }

    #[test]
    fn test_titled_entry_closed_by_next_header() {
        let summary = "## ⚡ Performance\n### Faster boot\ndetails\n## 💄 Style\n### Format code";
        let map = EmojiTitledParser::new(vocabulary()).parse(summary);

        assert_eq!(map.get("Performance").unwrap()[0].lines, vec!["details"]);
        assert_eq!(map.get("Style").unwrap()[0].title.as_deref(), Some("Format code"));
    }
}
