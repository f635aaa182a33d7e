//! Update command

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::{info, warn};

use chronicler_changelog::{ChangelogGenerator, UpdateReport};
use chronicler_core::workflow::{read_changelog, write_changelog, ReleaseInputs};

use super::{changelog_path, load_effective_config, read_body};
use crate::cli::{output, parse_date, Cli, DialectArg, HeadingStyleArg, OutputFormat};

/// Add a release to the changelog from aggregated release notes
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Release tag, e.g. v1.2.0 (defaults to the configured environment variable)
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

    /// Changelog file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Summary dialect of the release notes
    #[arg(long, value_enum)]
    pub dialect: Option<DialectArg>,

    /// Category headings to write
    #[arg(long, value_enum)]
    pub heading_style: Option<HeadingStyleArg>,

    /// Show what would be written without modifying the changelog
    #[arg(long)]
    pub dry_run: bool,
}

impl UpdateCommand {
    /// Execute the update command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(tag = ?self.tag, dry_run = self.dry_run, "executing update command");
        let cwd = std::env::current_dir()?;

        let (report, path) = self.run(&cwd, |name| std::env::var(name).ok())?;
        self.print(cli, &report, &path)
    }

    /// Resolve inputs, update the document and write it unless dry-running.
    ///
    /// Missing inputs and a missing changelog fail before anything is written.
    fn run<F>(&self, cwd: &Path, env: F) -> anyhow::Result<(UpdateReport, PathBuf)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, _) = load_effective_config(cwd, self.dialect, self.heading_style)?;

        let body = read_body(self.body.as_deref(), self.body_file.as_deref())?;
        let inputs = ReleaseInputs::resolve(self.tag.clone(), body, &config.release, env)?;
        let version = inputs.version(&config.release)?;

        let path = changelog_path(cwd, self.file.as_deref(), &config);
        let document = read_changelog(&path)?;

        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let generator = ChangelogGenerator::new(&config.changelog);
        let report = generator.update_document(&document, &inputs.body, &version, Some(date));

        if let Err(e) = generator.parse_document(&report.content).check_structure() {
            warn!(error = %e, "changelog structure problem after update");
        }

        if self.dry_run {
            info!(path = %path.display(), "dry run, changelog not written");
        } else {
            write_changelog(&path, &report.content)?;
        }

        Ok((report, path))
    }

    fn print(&self, cli: &Cli, report: &UpdateReport, path: &Path) -> anyhow::Result<()> {
        match cli.format {
            OutputFormat::Json => {
                let mut value = serde_json::to_value(report)?;
                value["path"] = serde_json::json!(path.display().to_string());
                value["dry_run"] = serde_json::json!(self.dry_run);
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Text => {
                if cli.quiet {
                    return Ok(());
                }

                if self.dry_run {
                    println!("{}", output::header("Release block (dry run)"));
                    println!();
                    println!("{}", report.block);
                } else {
                    output::success(&format!(
                        "Added {} to {}",
                        output::version_style().apply_to(&report.version),
                        output::path_style().apply_to(path.display())
                    ));
                }

                println!(
                    "{}",
                    output::key_value(
                        "Date",
                        &report.date.map(|d| d.to_string()).unwrap_or_default()
                    )
                );
                println!("{}", output::key_value("Items", &report.total_items.to_string()));
                for count in &report.categories {
                    println!("{}", output::category_count(&count.category, count.count));
                }
                println!(
                    "{}",
                    output::key_value(
                        "Sections",
                        &format!(
                            "{} ({} with summary)",
                            report.sections_found, report.sections_with_summary
                        )
                    )
                );
                println!("{}", output::key_value("Insertion", report.strategy.as_str()));

                if report.sections_found > 0 && report.sections_with_summary == 0 {
                    output::warning("No summaries found in the release notes");
                }
            }
        }

        Ok(())
    }
}
