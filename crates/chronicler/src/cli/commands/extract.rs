//! Extract command

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use tracing::info;

use chronicler_changelog::{ChangelogGenerator, UNRELEASED};
use chronicler_core::config::Config;
use chronicler_core::workflow::normalize_version;

use super::{load_effective_config, read_body};
use crate::cli::{output, parse_date, Cli, DialectArg, HeadingStyleArg, OutputFormat};

/// Print the release block for some release notes without writing
#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Release tag used in the block header (defaults to the configured
    /// environment variable, then `Unreleased`)
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Release notes text (defaults to the configured environment variable)
    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read release notes from a file, or `-` for stdin
    #[arg(long, value_name = "PATH")]
    pub body_file: Option<PathBuf>,

    /// Release date as YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Summary dialect of the release notes
    #[arg(long, value_enum)]
    pub dialect: Option<DialectArg>,

    /// Category headings to write
    #[arg(long, value_enum)]
    pub heading_style: Option<HeadingStyleArg>,
}

impl ExtractCommand {
    /// Execute the extract command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(tag = ?self.tag, "executing extract command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_effective_config(&cwd, self.dialect, self.heading_style)?;

        let env = |name: &str| std::env::var(name).ok();
        let body = read_body(self.body.as_deref(), self.body_file.as_deref())?
            .or_else(|| env(&config.release.body_env))
            .unwrap_or_default();
        let version = self.version(&config, env)?;
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());

        let generator = ChangelogGenerator::new(&config.changelog);
        let synthesis = generator.synthesize(&body);
        let block = generator.render(&synthesis, &version, Some(date));

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "version": version,
                    "date": date,
                    "total_items": synthesis.merged.total,
                    "categories": synthesis.merged.categories,
                    "counts": synthesis.merged.counts,
                    "sections": synthesis.sections,
                    "block": block,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                print!("{}", block);
                if !cli.quiet {
                    eprintln!();
                    eprintln!(
                        "{} {} item(s) from {} of {} section(s)",
                        style("→").blue(),
                        synthesis.merged.total,
                        synthesis.sections_with_summary(),
                        synthesis.sections.len()
                    );
                    if synthesis.merged.is_empty() {
                        output::warning("Nothing recognized, using the default entry");
                    }
                }
            }
        }

        Ok(())
    }

    /// Version label from `--tag` or the environment; `Unreleased` if neither
    fn version<F>(&self, config: &Config, env: F) -> anyhow::Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tag = self
            .tag
            .clone()
            .or_else(|| env(&config.release.tag_env))
            .filter(|t| !t.trim().is_empty());

        match tag {
            Some(tag) => Ok(normalize_version(&tag, &config.release.tag_prefix)?),
            None => Ok(UNRELEASED.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(tag: Option<&str>) -> ExtractCommand {
        ExtractCommand {
            tag: tag.map(String::from),
            body: None,
            body_file: None,
            date: None,
            dialect: None,
            heading_style: None,
        }
    }

    #[test]
    fn test_version_resolution() {
        let config = Config::default();
        let no_env = |_: &str| -> Option<String> { None };
        let tag_env = |name: &str| (name == "RELEASE_TAG_NAME").then(|| "v4.0.0".to_string());

        assert_eq!(command(Some("v1.2.3")).version(&config, tag_env).unwrap(), "1.2.3");
        assert_eq!(command(None).version(&config, tag_env).unwrap(), "4.0.0");
        assert_eq!(command(None).version(&config, no_env).unwrap(), "Unreleased");
        assert!(command(Some("v")).version(&config, no_env).is_err());
    }
}
