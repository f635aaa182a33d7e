//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    validate_release(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: "cannot be empty".to_string(),
        }
        .into());
    }
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "cannot be empty".to_string(),
        }
        .into());
    }

    require_non_empty("changelog.default_category", &config.changelog.default_category)?;
    require_non_empty(
        "changelog.summary.start_marker",
        &config.changelog.summary.start_marker,
    )?;
    require_non_empty(
        "changelog.summary.end_marker",
        &config.changelog.summary.end_marker,
    )?;

    if config.changelog.default_category.contains('\n') {
        return Err(ConfigError::InvalidValue {
            field: "changelog.default_category".to_string(),
            message: "must be a single line".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_release(config: &Config) -> Result<()> {
    require_non_empty("release.tag_env", &config.release.tag_env)?;
    require_non_empty("release.body_env", &config.release.body_env)?;
    Ok(())
}
