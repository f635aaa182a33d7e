//! Category vocabulary
//!
//! The recognized category labels, their render order, and the explicit
//! tables relating the summary keywords to emoji phrases and to the
//! Keep a Changelog names. One `Vocabulary` value is built up front and
//! shared (read-only) by every stage of the pipeline.

use serde::{Deserialize, Serialize};

use chronicler_core::HeadingStyle;

use crate::types::CategoryMap;

/// Sentinel label of the pending-changes block
pub const UNRELEASED: &str = "Unreleased";

/// Keep a Changelog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeepCategory {
    /// New features
    Added,
    /// Changes in existing functionality
    Changed,
    /// Soon-to-be removed features
    Deprecated,
    /// Removed features
    Removed,
    /// Bug fixes
    Fixed,
    /// Vulnerabilities
    Security,
}

impl KeepCategory {
    /// All categories in document order
    pub const ALL: [KeepCategory; 6] = [
        Self::Added,
        Self::Changed,
        Self::Deprecated,
        Self::Removed,
        Self::Fixed,
        Self::Security,
    ];

    /// Heading text for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
            Self::Security => "Security",
        }
    }
}

impl std::fmt::Display for KeepCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for KeepCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// One summary keyword and its relations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDefinition {
    /// Keyword as written in summaries and keyword-style headings
    pub keyword: String,
    /// Emoji phrases that label this category in release-drafter style text
    pub emoji_phrases: Vec<String>,
    /// Keep a Changelog category the keyword folds into
    pub keep: KeepCategory,
}

impl CategoryDefinition {
    fn new(keyword: &str, emoji_phrases: &[&str], keep: KeepCategory) -> Self {
        Self {
            keyword: keyword.to_string(),
            emoji_phrases: emoji_phrases.iter().map(|p| p.to_string()).collect(),
            keep,
        }
    }
}

/// Immutable category vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Definitions in recognition order
    definitions: Vec<CategoryDefinition>,
    /// Render order for keyword-style headings
    keyword_order: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        use KeepCategory::*;

        let definitions = vec![
            CategoryDefinition::new("Bug Fixes", &["🐛 Bug Fixes"], Fixed),
            CategoryDefinition::new("New Features", &["🚀 New Features"], Added),
            CategoryDefinition::new("Features", &["✨ Features"], Added),
            CategoryDefinition::new("Style", &["💄 Style"], Changed),
            CategoryDefinition::new("Refactor", &["♻️ Refactor", "♻ Refactor"], Changed),
            CategoryDefinition::new(
                "Documentation",
                &["📝 Documentation", "📚 Documentation"],
                Changed,
            ),
            CategoryDefinition::new("Tests", &["✅ Tests", "🧪 Tests"], Changed),
            CategoryDefinition::new("Chores", &["🔧 Chores", "🧹 Chores"], Changed),
            CategoryDefinition::new(
                "Performance",
                &["⚡️ Performance", "⚡ Performance"],
                Changed,
            ),
            CategoryDefinition::new("Security", &["🔒 Security", "🔐 Security"], Security),
            CategoryDefinition::new("Breaking Changes", &["💥 Breaking Changes"], Changed),
            CategoryDefinition::new(
                "Deprecated",
                &["🗑️ Deprecated", "🗑 Deprecated"],
                Deprecated,
            ),
        ];

        let keyword_order = [
            "Breaking Changes",
            "New Features",
            "Features",
            "Bug Fixes",
            "Performance",
            "Security",
            "Refactor",
            "Style",
            "Documentation",
            "Tests",
            "Chores",
            "Deprecated",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Self {
            definitions,
            keyword_order,
        }
    }
}

impl Vocabulary {
    /// Create the standard vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyword, appended to both the recognition list and render order
    pub fn with_category(
        mut self,
        keyword: &str,
        emoji_phrases: &[&str],
        keep: KeepCategory,
    ) -> Self {
        self.definitions
            .push(CategoryDefinition::new(keyword, emoji_phrases, keep));
        self.keyword_order.push(keyword.to_string());
        self
    }

    /// All definitions in recognition order
    pub fn definitions(&self) -> &[CategoryDefinition] {
        &self.definitions
    }

    /// Recognized keywords in recognition order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.keyword.as_str())
    }

    /// Canonical spelling of a keyword, matched case-insensitively
    pub fn canonical_keyword(&self, label: &str) -> Option<&str> {
        let label = label.trim().to_lowercase();
        self.keywords().find(|k| k.to_lowercase() == label)
    }

    /// Keyword whose emoji phrase appears anywhere in `line`
    pub fn keyword_for_emoji_line(&self, line: &str) -> Option<&str> {
        self.definitions
            .iter()
            .find(|d| d.emoji_phrases.iter().any(|p| line.contains(p.as_str())))
            .map(|d| d.keyword.as_str())
    }

    /// Keep a Changelog category for a label.
    ///
    /// Keep names map to themselves; keywords go through the table.
    pub fn keep_category(&self, label: &str) -> Option<KeepCategory> {
        if let Ok(keep) = label.parse::<KeepCategory>() {
            return Some(keep);
        }
        let keyword = self.canonical_keyword(label)?;
        self.definitions
            .iter()
            .find(|d| d.keyword == keyword)
            .map(|d| d.keep)
    }

    /// Canonical render order for a heading style
    pub fn order(&self, style: HeadingStyle) -> Vec<&str> {
        match style {
            HeadingStyle::Keyword => self.keyword_order.iter().map(String::as_str).collect(),
            HeadingStyle::KeepAChangelog => KeepCategory::ALL.iter().map(|c| c.as_str()).collect(),
        }
    }

    /// Fold keyword categories into Keep a Changelog categories.
    ///
    /// Labels with no mapping are carried over unchanged. Items keep their
    /// encounter order within each folded category.
    pub fn to_keep_a_changelog(&self, categories: &CategoryMap) -> CategoryMap {
        let mut folded = CategoryMap::new();
        for (label, items) in categories.iter() {
            let target = self
                .keep_category(label)
                .map(|k| k.as_str().to_string())
                .unwrap_or_else(|| label.to_string());
            folded.extend(&target, items.iter().cloned());
        }
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeItem;

    #[test]
    fn test_keep_category_from_str() {
        assert_eq!("fixed".parse::<KeepCategory>(), Ok(KeepCategory::Fixed));
        assert_eq!(" Added ".parse::<KeepCategory>(), Ok(KeepCategory::Added));
        assert!("Bug Fixes".parse::<KeepCategory>().is_err());
    }

    #[test]
    fn test_canonical_keyword() {
        let vocab = Vocabulary::new();
        assert_eq!(vocab.canonical_keyword("bug fixes"), Some("Bug Fixes"));
        assert_eq!(vocab.canonical_keyword("BREAKING CHANGES"), Some("Breaking Changes"));
        assert_eq!(vocab.canonical_keyword("Misc"), None);
    }

    #[test]
    fn test_emoji_lookup() {
        let vocab = Vocabulary::new();
        assert_eq!(vocab.keyword_for_emoji_line("## 🐛 Bug Fixes"), Some("Bug Fixes"));
        assert_eq!(vocab.keyword_for_emoji_line("### 🚀 New Features (3)"), Some("New Features"));
        assert_eq!(vocab.keyword_for_emoji_line("⚡ Performance"), Some("Performance"));
        assert_eq!(vocab.keyword_for_emoji_line("## Bug Fixes"), None);
    }

    #[test]
    fn test_keep_mapping_table() {
        let vocab = Vocabulary::new();
        assert_eq!(vocab.keep_category("New Features"), Some(KeepCategory::Added));
        assert_eq!(vocab.keep_category("Bug Fixes"), Some(KeepCategory::Fixed));
        assert_eq!(vocab.keep_category("Deprecated"), Some(KeepCategory::Deprecated));
        assert_eq!(vocab.keep_category("Removed"), Some(KeepCategory::Removed));
        assert_eq!(vocab.keep_category("Misc"), None);
    }

    #[test]
    fn test_orders() {
        let vocab = Vocabulary::new();
        let keyword = vocab.order(HeadingStyle::Keyword);
        assert_eq!(keyword.first(), Some(&"Breaking Changes"));
        assert_eq!(keyword.last(), Some(&"Deprecated"));
        assert_eq!(keyword.len(), 12);

        let keep = vocab.order(HeadingStyle::KeepAChangelog);
        assert_eq!(
            keep,
            vec!["Added", "Changed", "Deprecated", "Removed", "Fixed", "Security"]
        );
    }

    #[test]
    fn test_with_category_extends_vocabulary() {
        let vocab = Vocabulary::new().with_category(
            "Dependencies",
            &["⬆️ Dependencies"],
            KeepCategory::Changed,
        );
        assert_eq!(vocab.canonical_keyword("dependencies"), Some("Dependencies"));
        assert_eq!(vocab.order(HeadingStyle::Keyword).last(), Some(&"Dependencies"));
        assert_eq!(vocab.keyword_for_emoji_line("## ⬆️ Dependencies"), Some("Dependencies"));
    }

    #[test]
    fn test_fold_into_keep_a_changelog() {
        let vocab = Vocabulary::new();
        let mut categories = CategoryMap::new();
        categories.push("Features", ChangeItem::new("one"));
        categories.push("Bug Fixes", ChangeItem::new("two"));
        categories.push("New Features", ChangeItem::new("three"));
        categories.push("Misc", ChangeItem::new("four"));

        let folded = vocab.to_keep_a_changelog(&categories);
        let added: Vec<String> = folded.get("Added").unwrap().iter().map(|i| i.text()).collect();
        assert_eq!(added, vec!["one", "three"]);
        assert_eq!(folded.get("Fixed").unwrap().len(), 1);
        assert_eq!(folded.get("Misc").unwrap().len(), 1);
    }
}
