//! Core types for Chronicler

use serde::{Deserialize, Serialize};

/// Surface convention used by the automated summaries in release text.
///
/// Every dialect is read from inside the summary markers, so notes without
/// the default CodeRabbit start marker need `summary.start_marker` set to
/// whatever opens them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Bolded or heading keyword labels (`* **Bug Fixes**`, `### Bug Fixes`)
    #[default]
    Keyword,
    /// Emoji-prefixed labels, one `- ` line per entry
    EmojiFlat,
    /// Emoji-prefixed labels, entries introduced by `### <title>`
    EmojiTitled,
}

impl Dialect {
    /// Returns the string representation of the dialect
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::EmojiFlat => "emoji-flat",
            Self::EmojiTitled => "emoji-titled",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keyword" | "coderabbit" => Ok(Self::Keyword),
            "emoji-flat" | "emoji" | "flat" => Ok(Self::EmojiFlat),
            "emoji-titled" | "titled" => Ok(Self::EmojiTitled),
            _ => Err(format!("Unknown dialect: {}", s)),
        }
    }
}

/// Category headings written into the changelog document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadingStyle {
    /// Keep the summary keywords (`### Bug Fixes`, `### New Features`)
    #[default]
    Keyword,
    /// Map onto Keep a Changelog names (`### Fixed`, `### Added`)
    KeepAChangelog,
}

impl HeadingStyle {
    /// Returns the string representation of the heading style
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::KeepAChangelog => "keep-a-changelog",
        }
    }
}

impl std::fmt::Display for HeadingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HeadingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keyword" => Ok(Self::Keyword),
            "keep-a-changelog" | "keepachangelog" | "keep" => Ok(Self::KeepAChangelog),
            _ => Err(format!("Unknown heading style: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("keyword".parse::<Dialect>().unwrap(), Dialect::Keyword);
        assert_eq!("Emoji-Flat".parse::<Dialect>().unwrap(), Dialect::EmojiFlat);
        assert_eq!("titled".parse::<Dialect>().unwrap(), Dialect::EmojiTitled);
        assert!("markdown".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_heading_style_roundtrip() {
        for style in [HeadingStyle::Keyword, HeadingStyle::KeepAChangelog] {
            assert_eq!(style.as_str().parse::<HeadingStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Dialect::EmojiTitled).unwrap();
        assert_eq!(json, "\"emoji-titled\"");
        let style: HeadingStyle = serde_json::from_str("\"keep-a-changelog\"").unwrap();
        assert_eq!(style, HeadingStyle::KeepAChangelog);
    }
}
