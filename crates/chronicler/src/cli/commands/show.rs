//! Show command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use chronicler_changelog::{ChangelogGenerator, ParsedChangelog, VersionBlock};
use chronicler_core::workflow::read_changelog;

use super::{changelog_path, load_effective_config};
use crate::cli::{output, Cli, HeadingStyleArg, OutputFormat};

/// Show versions recorded in the changelog
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Changelog file (defaults to the configured file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Only the most recent released version
    #[arg(long, conflicts_with_all = ["unreleased", "release"])]
    pub latest: bool,

    /// Only the Unreleased section
    #[arg(long, conflicts_with = "release")]
    pub unreleased: bool,

    /// Only the given version, e.g. 1.2.0 or v1.2.0
    #[arg(long, value_name = "VERSION")]
    pub release: Option<String>,

    /// Category headings used by the document
    #[arg(long, value_enum)]
    pub heading_style: Option<HeadingStyleArg>,
}

impl ShowCommand {
    /// Execute the show command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            latest = self.latest,
            unreleased = self.unreleased,
            release = ?self.release,
            "executing show command"
        );
        let cwd = std::env::current_dir()?;
        let (config, _) = load_effective_config(&cwd, None, self.heading_style)?;

        let path = changelog_path(&cwd, self.file.as_deref(), &config);
        let document = read_changelog(&path)?;

        let generator = ChangelogGenerator::new(&config.changelog);
        let parsed = generator.parse_document(&document);
        let selected = self.select(&parsed)?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&selected)?);
            }
            OutputFormat::Text => {
                if selected.is_empty() {
                    if !cli.quiet {
                        output::info(&format!(
                            "No versions in {}",
                            output::path_style().apply_to(path.display())
                        ));
                    }
                    return Ok(());
                }

                for block in &selected {
                    print!("{}", generator.render_version(block));
                }

                if !cli.quiet {
                    eprintln!(
                        "{} {} version(s), {} change(s)",
                        style("→").blue(),
                        selected.len(),
                        selected.iter().map(|b| b.change_count()).sum::<usize>()
                    );
                }
            }
        }

        Ok(())
    }

    fn select<'a>(&self, parsed: &'a ParsedChangelog) -> anyhow::Result<Vec<&'a VersionBlock>> {
        let selected = if self.latest {
            parsed.latest_version()
        } else if self.unreleased {
            parsed.unreleased()
        } else if let Some(label) = &self.release {
            Some(
                parsed
                    .find(label)
                    .ok_or_else(|| anyhow::anyhow!("Version {} not found in changelog", label))?,
            )
        } else {
            return Ok(parsed.versions.iter().collect());
        };

        Ok(selected.into_iter().collect())
    }
}
