//! CLI definition and command handling

pub mod commands;
pub mod output;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use chronicler_core::{Dialect, HeadingStyle};
use commands::{
    CheckCommand, CompletionsCommand, ExtractCommand, InitCommand, ShowCommand, UpdateCommand,
};

/// Chronicler - Changelog maintenance from aggregated release notes
#[derive(Debug, Parser)]
#[command(name = "chronicler")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Summary dialect as a command-line value
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DialectArg {
    /// `* **Bug Fixes**` style category labels
    Keyword,
    /// Emoji category labels with `- ` items
    EmojiFlat,
    /// Emoji category labels with `### Title` entries
    EmojiTitled,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Keyword => Dialect::Keyword,
            DialectArg::EmojiFlat => Dialect::EmojiFlat,
            DialectArg::EmojiTitled => Dialect::EmojiTitled,
        }
    }
}

/// Changelog heading style as a command-line value
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HeadingStyleArg {
    /// Summary keywords (`### Bug Fixes`)
    Keyword,
    /// Keep a Changelog names (`### Fixed`)
    KeepAChangelog,
}

impl From<HeadingStyleArg> for HeadingStyle {
    fn from(arg: HeadingStyleArg) -> Self {
        match arg {
            HeadingStyleArg::Keyword => HeadingStyle::Keyword,
            HeadingStyleArg::KeepAChangelog => HeadingStyle::KeepAChangelog,
        }
    }
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD ({})", e))
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a release to the changelog from aggregated release notes
    Update(UpdateCommand),

    /// Print the release block for some release notes without writing
    Extract(ExtractCommand),

    /// Show versions recorded in the changelog
    Show(ShowCommand),

    /// Validate configuration and changelog structure
    Check(CheckCommand),

    /// Initialize a new Chronicler configuration
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Update(ref cmd) => cmd.execute(&self),
            Commands::Extract(ref cmd) => cmd.execute(&self),
            Commands::Show(ref cmd) => cmd.execute(&self),
            Commands::Check(ref cmd) => cmd.execute(&self),
            Commands::Init(ref cmd) => cmd.execute(&self),
            Commands::Completions(ref cmd) => cmd.execute(&self),
        }
    }
}
