//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::{Dialect, HeadingStyle};

/// Main configuration for Chronicler
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Release input configuration
    pub release: ReleaseConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path
    pub file: PathBuf,

    /// Convention used by the summaries embedded in release text
    pub dialect: Dialect,

    /// Category headings written to the changelog
    pub heading_style: HeadingStyle,

    /// Category used for the placeholder entry when nothing was recognized
    pub default_category: String,

    /// Summary block markers
    pub summary: SummaryConfig,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG.md"),
            dialect: Dialect::default(),
            heading_style: HeadingStyle::default(),
            default_category: "Changes".to_string(),
            summary: SummaryConfig::default(),
        }
    }
}

/// Markers delimiting an automated summary inside a contribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Text that opens the summary block
    pub start_marker: String,

    /// Text that closes the summary block
    pub end_marker: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            start_marker: "## Summary by CodeRabbit".to_string(),
            end_marker: "<sub>".to_string(),
        }
    }
}

/// Where release inputs come from when not given on the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Environment variable holding the release tag
    pub tag_env: String,

    /// Environment variable holding the release body
    pub body_env: String,

    /// Prefix stripped from the tag to form the version label
    pub tag_prefix: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            tag_env: "RELEASE_TAG_NAME".to_string(),
            body_env: "RELEASE_BODY".to_string(),
            tag_prefix: "v".to_string(),
        }
    }
}
