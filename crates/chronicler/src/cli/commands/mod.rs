//! CLI commands

mod check;
mod completions;
mod extract;
mod init;
mod show;
mod update;

pub use check::{CheckCommand, ValidationFailed};
pub use completions::CompletionsCommand;
pub use extract::ExtractCommand;
pub use init::InitCommand;
pub use show::ShowCommand;
pub use update::UpdateCommand;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chronicler_core::config::{load_config_or_default, validate_config, Config};
use tracing::debug;

use super::{DialectArg, HeadingStyleArg};

/// Load the configuration for `cwd` and apply command-line overrides.
///
/// Overrides are validated together with the loaded values.
fn load_effective_config(
    cwd: &Path,
    dialect: Option<DialectArg>,
    heading_style: Option<HeadingStyleArg>,
) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let (mut config, path) = load_config_or_default(cwd)?;

    if let Some(dialect) = dialect {
        config.changelog.dialect = dialect.into();
    }
    if let Some(style) = heading_style {
        config.changelog.heading_style = style.into();
    }

    validate_config(&config)?;
    debug!(
        dialect = %config.changelog.dialect,
        heading_style = %config.changelog.heading_style,
        "effective configuration"
    );
    Ok((config, path))
}

/// Release body from `--body` or `--body-file` (`-` reads stdin)
fn read_body(body: Option<&str>, body_file: Option<&Path>) -> anyhow::Result<Option<String>> {
    if let Some(body) = body {
        return Ok(Some(body.to_string()));
    }

    let Some(path) = body_file else {
        return Ok(None);
    };

    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read release body from stdin")?;
        return Ok(Some(buffer));
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read release body from {}", path.display()))?;
    Ok(Some(content))
}

/// Resolve a changelog path against the working directory
fn changelog_path(cwd: &Path, file: Option<&Path>, config: &Config) -> PathBuf {
    cwd.join(file.unwrap_or(config.changelog.file.as_path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicler_core::{Dialect, HeadingStyle};
    use tempfile::TempDir;

    #[test]
    fn test_overrides_apply() {
        let temp = TempDir::new().unwrap();
        let (config, path) = load_effective_config(
            temp.path(),
            Some(DialectArg::EmojiFlat),
            Some(HeadingStyleArg::KeepAChangelog),
        )
        .unwrap();

        assert!(path.is_none());
        assert_eq!(config.changelog.dialect, Dialect::EmojiFlat);
        assert_eq!(config.changelog.heading_style, HeadingStyle::KeepAChangelog);
    }

    #[test]
    fn test_config_file_is_used() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("chronicler.toml"),
            "[changelog]\nfile = \"docs/CHANGES.md\"\ndialect = \"emoji-titled\"\n",
        )
        .unwrap();

        let (config, path) = load_effective_config(temp.path(), None, None).unwrap();
        assert!(path.is_some());
        assert_eq!(config.changelog.dialect, Dialect::EmojiTitled);
        assert_eq!(
            changelog_path(temp.path(), None, &config),
            temp.path().join("docs/CHANGES.md")
        );
    }

    #[test]
    fn test_read_body_sources() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.md");
        std::fs::write(&file, "from file").unwrap();

        assert_eq!(read_body(Some("inline"), None).unwrap().as_deref(), Some("inline"));
        assert_eq!(read_body(None, Some(&file)).unwrap().as_deref(), Some("from file"));
        assert!(read_body(None, None).unwrap().is_none());
        assert!(read_body(None, Some(&temp.path().join("missing.md"))).is_err());
    }
}
