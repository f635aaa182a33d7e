//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use dialoguer::{Confirm, Select};
use tracing::info;

use chronicler_core::config::{Config, DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_YAML};

use crate::cli::{output, Cli};

/// Initialize a new Chronicler configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Use defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, yes = self.yes, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_YAML));

        // Check if config already exists
        if config_path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        let format = if self.yes {
            "yaml"
        } else {
            let formats = vec!["yaml", "toml"];
            let selection = Select::new()
                .with_prompt("Configuration format")
                .items(&formats)
                .default(0)
                .interact()?;
            formats[selection]
        };

        let (config_path, content) = render_config(&config_path, format == "toml")?;
        std::fs::write(&config_path, &content)?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                output::path_style().apply_to(config_path.display())
            ));
            println!();
            println!("Next steps:");
            println!("  1. Edit {} to match your release notes", config_path.display());
            println!("  2. Run {} to verify your setup", style("chronicler check").cyan());
            println!(
                "  3. Run {} to record a release",
                style("chronicler update --tag v1.0.0").cyan()
            );
        }

        Ok(())
    }
}

/// Configuration text for the chosen format, and the path adjusted to it
fn render_config(path: &Path, as_toml: bool) -> anyhow::Result<(PathBuf, String)> {
    if !as_toml {
        return Ok((path.to_path_buf(), DEFAULT_CONFIG_TEMPLATE.to_string()));
    }

    let path = if path.extension().is_some_and(|e| e == "yaml") {
        path.with_extension("toml")
    } else {
        path.to_path_buf()
    };
    let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE)?;
    Ok((path, toml::to_string_pretty(&config)?))
}
