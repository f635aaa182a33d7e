//! Check command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use chronicler_changelog::ChangelogGenerator;
use chronicler_core::config::load_config_or_default;

use super::changelog_path;
use crate::cli::{Cli, OutputFormat};

/// Returned when a check finds errors
#[derive(Debug, thiserror::Error)]
#[error("Validation failed with {0} error(s)")]
pub struct ValidationFailed(pub usize);

/// Validate configuration and changelog structure
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Changelog file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Problems found by a check
#[derive(Debug, Default)]
struct Findings {
    config_path: Option<PathBuf>,
    changelog_path: Option<PathBuf>,
    versions: usize,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(strict = self.strict, "executing check command");
        let cwd = std::env::current_dir()?;

        let mut findings = self.run(&cwd);

        // If strict, promote warnings to errors
        if self.strict {
            let mut warnings = std::mem::take(&mut findings.warnings);
            findings.errors.append(&mut warnings);
        }

        let passed = findings.errors.is_empty();
        print(cli, &findings, passed)?;

        if !passed {
            return Err(ValidationFailed(findings.errors.len()).into());
        }
        Ok(())
    }

    fn run(&self, cwd: &Path) -> Findings {
        let mut findings = Findings::default();

        let config = match load_config_or_default(cwd) {
            Ok((config, path)) => {
                if path.is_none() {
                    findings
                        .warnings
                        .push("No configuration file found, using defaults".to_string());
                }
                findings.config_path = path;
                config
            }
            Err(e) => {
                findings.errors.push(format!("Configuration: {}", e));
                return findings;
            }
        };

        let path = changelog_path(cwd, self.file.as_deref(), &config);
        if !path.exists() {
            findings
                .errors
                .push(format!("Changelog file not found at {}", path.display()));
            return findings;
        }

        let document = match std::fs::read_to_string(&path) {
            Ok(document) => document,
            Err(e) => {
                findings.errors.push(format!("Changelog: {}", e));
                return findings;
            }
        };
        findings.changelog_path = Some(path);

        let parsed = ChangelogGenerator::new(&config.changelog).parse_document(&document);
        findings.versions = parsed.versions.len();

        if let Err(e) = parsed.check_structure() {
            findings.errors.push(format!("Changelog structure: {}", e));
        }
        if parsed.is_empty() {
            findings
                .warnings
                .push("Changelog has no version sections".to_string());
        } else if parsed.unreleased().is_none() {
            findings.warnings.push(
                "No Unreleased section; new releases will be appended at the end".to_string(),
            );
        }
        for block in parsed.versions.iter().filter(|b| !b.is_unreleased()) {
            if block.date.is_none() {
                findings
                    .warnings
                    .push(format!("Version {} has no valid release date", block.version));
            }
        }

        findings
    }
}

fn print(cli: &Cli, findings: &Findings, passed: bool) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let display = |path: &Option<PathBuf>| path.as_ref().map(|p| p.display().to_string());
            let output = serde_json::json!({
                "valid": passed,
                "config_path": display(&findings.config_path),
                "changelog_path": display(&findings.changelog_path),
                "versions": findings.versions,
                "errors": findings.errors,
                "warnings": findings.warnings
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            if cli.quiet {
                return Ok(());
            }

            println!("{}", style("Check Results").bold());
            println!();

            if let Some(path) = &findings.config_path {
                println!("Config: {}", style(path.display()).cyan());
            }
            if let Some(path) = &findings.changelog_path {
                println!(
                    "Changelog: {} ({} version(s))",
                    style(path.display()).cyan(),
                    findings.versions
                );
            }
            println!();

            if !findings.errors.is_empty() {
                println!("{}", style("Errors:").red().bold());
                for error in &findings.errors {
                    println!("  {} {}", style("✗").red(), error);
                }
                println!();
            }

            if !findings.warnings.is_empty() {
                println!("{}", style("Warnings:").yellow().bold());
                for warning in &findings.warnings {
                    println!("  {} {}", style("!").yellow(), warning);
                }
                println!();
            }

            if passed {
                if findings.warnings.is_empty() {
                    println!("{}", style("✓ All checks passed").green().bold());
                } else {
                    println!(
                        "{} with {} warning(s)",
                        style("✓ Check passed").green().bold(),
                        findings.warnings.len()
                    );
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn command() -> CheckCommand {
        CheckCommand {
            file: None,
            strict: false,
        }
    }

    fn setup(changelog: Option<&str>) -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("chronicler.yaml"),
            "changelog:\n  file: CHANGELOG.md\n",
        )
        .unwrap();
        if let Some(content) = changelog {
            std::fs::write(temp.path().join("CHANGELOG.md"), content).unwrap();
        }
        temp
    }

    #[test]
    fn test_healthy_changelog() {
        let temp = setup(Some(
            "# Changelog\n\n## [Unreleased]\n\n## [1.0.0] - 2024-01-01\n\n### Added\n\n- First\n",
        ));
        let findings = command().run(temp.path());

        assert!(findings.errors.is_empty(), "{:?}", findings.errors);
        assert!(findings.warnings.is_empty(), "{:?}", findings.warnings);
        assert_eq!(findings.versions, 2);
        assert!(findings.config_path.is_some());
    }

    #[test]
    fn test_missing_changelog() {
        let temp = setup(None);
        let findings = command().run(temp.path());
        assert_eq!(findings.errors.len(), 1);
        assert!(findings.errors[0].contains("not found"));
    }

    #[test]
    fn test_structure_errors() {
        let temp = setup(Some("## [1.0.0] - 2024-01-01\n\n## [Unreleased]\n"));
        let findings = command().run(temp.path());
        assert_eq!(findings.errors.len(), 1);
        assert!(findings.errors[0].starts_with("Changelog structure"));
    }

    #[test]
    fn test_warnings() {
        let temp = setup(Some("## [1.0.0]\n\n### Added\n\n- First\n"));
        let findings = command().run(temp.path());
        assert!(findings.errors.is_empty());
        assert_eq!(findings.warnings.len(), 2);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("chronicler.yaml"),
            "changelog:\n  default_category: \"\"\n",
        )
        .unwrap();
        let findings = command().run(temp.path());
        assert_eq!(findings.errors.len(), 1);
        assert!(findings.errors[0].starts_with("Configuration"));
    }
}
