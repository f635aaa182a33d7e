//! Exit codes for the CLI

use chronicler_core::{ChangelogError, ChroniclerError, ConfigError};

use crate::cli::commands::ValidationFailed;

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error (bad config, missing version, missing changelog)
pub const CONFIG_ERROR: u8 = 2;

/// Validation error
pub const VALIDATION_ERROR: u8 = 5;

/// Exit code for an error returned by a command
pub fn for_error(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ValidationFailed>().is_some() {
        return VALIDATION_ERROR;
    }

    if let Some(err) = err.downcast_ref::<ChroniclerError>() {
        return match err {
            e if e.is_configuration() => CONFIG_ERROR,
            ChroniclerError::Changelog(e) => for_changelog_error(e),
            _ => ERROR,
        };
    }

    if err.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }

    match err.downcast_ref::<ChangelogError>() {
        Some(e) => for_changelog_error(e),
        None => ERROR,
    }
}

fn for_changelog_error(err: &ChangelogError) -> u8 {
    match err {
        ChangelogError::MissingVersion(_) | ChangelogError::FileNotFound(_) => CONFIG_ERROR,
        ChangelogError::DuplicateUnreleased(_) | ChangelogError::UnreleasedNotFirst(_) => {
            VALIDATION_ERROR
        }
        _ => ERROR,
    }
}
