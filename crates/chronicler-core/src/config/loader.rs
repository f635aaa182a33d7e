//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    let is_toml = path.extension().is_some_and(|e| e == "toml");
    info!(path = %path.display(), format = if is_toml { "TOML" } else { "YAML" }, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&content, is_toml)?;

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Parse configuration text; an empty file yields the defaults
pub fn parse_config(content: &str, is_toml: bool) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config = if is_toml {
        toml::from_str(content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(content).map_err(ConfigError::YamlError)?
    };
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// At each level `<dir>/<name>` is checked before `<dir>/.github/<name>`.
/// The first match wins.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.exists() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration from directory (searching parent directories)
pub fn load_config_from_dir(dir: &Path) -> Result<(Config, PathBuf)> {
    let config_path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;

    let config = load_config(&config_path)?;
    Ok((config, config_path))
}

/// Load configuration or use defaults.
///
/// A missing file falls back to defaults; a file that exists but fails to
/// parse or validate is still an error.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    match find_config(dir) {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            warn!(dir = %dir.display(), "no config found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dialect, HeadingStyle};
    use tempfile::TempDir;

    #[test]
    fn test_find_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("chronicler.toml");
        std::fs::write(&config_path, "[changelog]\ndialect = \"emoji-flat\"").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_github_dir() {
        let temp = TempDir::new().unwrap();
        let github_dir = temp.path().join(".github");
        std::fs::create_dir_all(&github_dir).unwrap();
        let config_path = github_dir.join("chronicler.yaml");
        std::fs::write(&config_path, "changelog:\n  dialect: keyword\n").unwrap();

        assert_eq!(find_config(temp.path()), Some(config_path));
    }

    #[test]
    fn test_root_level_preferred_over_github_dir() {
        let temp = TempDir::new().unwrap();
        let root_path = temp.path().join("chronicler.toml");
        let github_dir = temp.path().join(".github");
        std::fs::create_dir_all(&github_dir).unwrap();
        std::fs::write(&root_path, "").unwrap();
        std::fs::write(github_dir.join("chronicler.toml"), "").unwrap();

        assert_eq!(find_config(temp.path()), Some(root_path));
    }

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("chronicler.toml");
        std::fs::write(
            &config_path,
            "[changelog]\nfile = \"docs/CHANGES.md\"\nheading_style = \"keep-a-changelog\"\n\n[release]\ntag_prefix = \"release-\"\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.changelog.file, PathBuf::from("docs/CHANGES.md"));
        assert_eq!(config.changelog.heading_style, HeadingStyle::KeepAChangelog);
        assert_eq!(config.release.tag_prefix, "release-");
        assert_eq!(config.release.tag_env, "RELEASE_TAG_NAME");
    }

    #[test]
    fn test_load_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("chronicler.yaml");
        std::fs::write(
            &config_path,
            "changelog:\n  dialect: emoji-titled\n  summary:\n    end_marker: \"<!-- end -->\"\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.changelog.dialect, Dialect::EmojiTitled);
        assert_eq!(config.changelog.summary.end_marker, "<!-- end -->");
        assert_eq!(config.changelog.summary.start_marker, "## Summary by CodeRabbit");
    }

    #[test]
    fn test_load_invalid_config_is_error() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("chronicler.toml");
        std::fs::write(&config_path, "[changelog]\ndefault_category = \"\"\n").unwrap();

        assert!(load_config(&config_path).is_err());
        assert!(load_config_or_default(temp.path()).is_err());
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let (config, path) = load_config_or_default(temp.path()).unwrap();
        assert!(path.is_none());
        assert_eq!(config.changelog.file, PathBuf::from("CHANGELOG.md"));
    }
}
