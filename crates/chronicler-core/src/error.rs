//! Error types for Chronicler

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ChroniclerError
pub type Result<T> = std::result::Result<T, ChroniclerError>;

/// Main error type for Chronicler operations
#[derive(Debug, Error)]
pub enum ChroniclerError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Configuration-related errors
///
/// Everything in here is fatal and raised before the changelog is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Missing required input
    #[error("Missing required input: {0}")]
    MissingField(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Version label was empty once the tag prefix was removed
    #[error("Version label is required (got '{0}')")]
    MissingVersion(String),

    /// Changelog file not found
    #[error("Changelog file not found at {0}")]
    FileNotFound(PathBuf),

    /// Failed to write changelog
    #[error("Failed to write changelog: {0}")]
    WriteFailed(String),

    /// Document has more than one Unreleased section
    #[error("Changelog has {0} Unreleased sections, expected at most one")]
    DuplicateUnreleased(usize),

    /// Unreleased section is not the first version block
    #[error("Unreleased section must be the first version block (found at position {0})")]
    UnreleasedNotFirst(usize),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChroniclerError {
    /// Whether this error is a fatal configuration condition
    /// (bad config, missing version label, missing changelog file)
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::Changelog(ChangelogError::MissingVersion(_))
                | Self::Changelog(ChangelogError::FileNotFound(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_flagged() {
        let missing: ChroniclerError = ConfigError::MissingField("RELEASE_TAG_NAME".into()).into();
        assert!(missing.is_configuration());

        let no_file: ChroniclerError =
            ChangelogError::FileNotFound(PathBuf::from("CHANGELOG.md")).into();
        assert!(no_file.is_configuration());

        let structure: ChroniclerError = ChangelogError::DuplicateUnreleased(2).into();
        assert!(!structure.is_configuration());
    }

    #[test]
    fn test_error_messages() {
        let err = ChangelogError::FileNotFound(PathBuf::from("CHANGELOG.md"));
        assert_eq!(err.to_string(), "Changelog file not found at CHANGELOG.md");

        let err = ConfigError::MissingField("RELEASE_TAG_NAME".into());
        assert_eq!(err.to_string(), "Missing required input: RELEASE_TAG_NAME");
    }
}
