//! Release inputs supplied by the calling environment

use tracing::debug;

use crate::config::ReleaseConfig;
use crate::error::{ChangelogError, ConfigError, Result};

/// Raw inputs for one changelog update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInputs {
    /// Release tag as given (e.g. `v1.2.0`)
    pub tag: String,
    /// Aggregated release body, possibly empty
    pub body: String,
}

impl ReleaseInputs {
    /// Resolve inputs from explicit values, falling back to the configured
    /// environment variables.
    ///
    /// A missing or blank tag is fatal. A missing body is treated as empty.
    pub fn resolve<F>(
        tag: Option<String>,
        body: Option<String>,
        config: &ReleaseConfig,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tag = tag
            .or_else(|| lookup(&config.tag_env))
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingField(config.tag_env.clone()))?;

        let body = body.or_else(|| lookup(&config.body_env)).unwrap_or_default();
        debug!(tag = %tag, body_len = body.len(), "resolved release inputs");

        Ok(Self { tag, body })
    }

    /// Resolve inputs using the process environment
    pub fn from_env(
        tag: Option<String>,
        body: Option<String>,
        config: &ReleaseConfig,
    ) -> Result<Self> {
        Self::resolve(tag, body, config, |name| std::env::var(name).ok())
    }

    /// Version label derived from the tag
    pub fn version(&self, config: &ReleaseConfig) -> Result<String> {
        normalize_version(&self.tag, &config.tag_prefix)
    }
}

/// Strip a single leading tag prefix (usually `v`) from a release tag.
///
/// The remainder is passed through verbatim; it is not checked for semver.
pub fn normalize_version(tag: &str, prefix: &str) -> Result<String> {
    let trimmed = tag.trim();
    let version = if prefix.is_empty() {
        trimmed
    } else {
        trimmed.strip_prefix(prefix).unwrap_or(trimmed)
    };

    if version.is_empty() {
        return Err(ChangelogError::MissingVersion(tag.to_string()).into());
    }
    Ok(version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_normalize_version() {
        assert_eq!(normalize_version("v1.2.0", "v").unwrap(), "1.2.0");
        assert_eq!(normalize_version("1.2.0", "v").unwrap(), "1.2.0");
        assert_eq!(normalize_version("vv1.0", "v").unwrap(), "v1.0");
        assert_eq!(normalize_version("release-2024.1", "release-").unwrap(), "2024.1");
        assert_eq!(normalize_version("v1.0", "").unwrap(), "v1.0");
    }

    #[test]
    fn test_normalize_version_rejects_bare_prefix() {
        assert!(normalize_version("v", "v").is_err());
        assert!(normalize_version("  ", "v").is_err());
    }

    #[test]
    fn test_resolve_from_lookup() {
        let vars = env(&[("RELEASE_TAG_NAME", "v2.0.0"), ("RELEASE_BODY", "body")]);
        let config = ReleaseConfig::default();
        let inputs = ReleaseInputs::resolve(None, None, &config, |k| vars.get(k).cloned()).unwrap();

        assert_eq!(inputs.tag, "v2.0.0");
        assert_eq!(inputs.body, "body");
        assert_eq!(inputs.version(&config).unwrap(), "2.0.0");
    }

    #[test]
    fn test_explicit_values_win() {
        let vars = env(&[("RELEASE_TAG_NAME", "v2.0.0")]);
        let config = ReleaseConfig::default();
        let inputs = ReleaseInputs::resolve(
            Some("v3.0.0".to_string()),
            Some("explicit".to_string()),
            &config,
            |k| vars.get(k).cloned(),
        )
        .unwrap();

        assert_eq!(inputs.tag, "v3.0.0");
        assert_eq!(inputs.body, "explicit");
    }

    #[test]
    fn test_missing_tag_is_configuration_error() {
        let config = ReleaseConfig::default();
        let err = ReleaseInputs::resolve(None, Some("body".into()), &config, |_| None).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("RELEASE_TAG_NAME"));
    }

    #[test]
    fn test_missing_body_defaults_to_empty() {
        let config = ReleaseConfig::default();
        let inputs =
            ReleaseInputs::resolve(Some("v1.0.0".into()), None, &config, |_| None).unwrap();
        assert!(inputs.body.is_empty());
    }
}
