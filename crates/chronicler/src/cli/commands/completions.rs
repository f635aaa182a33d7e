//! Shell completions generation command

use std::path::PathBuf;

use clap::{Args, Command, CommandFactory};
use clap_complete::{generate, generate_to, Shell};
use tracing::info;

use crate::cli::{output, Cli};

const BIN_NAME: &str = "chronicler";

/// Generate shell completions
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write into this directory under the shell's usual file name
    /// instead of stdout
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(shell = %self.shell, dir = ?self.dir, "executing completions command");
        let mut cmd = command();

        match &self.dir {
            Some(dir) => {
                let path = generate_to(self.shell, &mut cmd, BIN_NAME, dir)?;
                if !cli.quiet {
                    output::success(&format!(
                        "Completions written to {}",
                        output::path_style().apply_to(path.display())
                    ));
                }
            }
            None => generate(self.shell, &mut cmd, BIN_NAME, &mut std::io::stdout()),
        }

        Ok(())
    }
}

fn command() -> Command {
    Cli::command().name(BIN_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_mention_commands() {
        let mut buffer = Vec::new();
        generate(Shell::Bash, &mut command(), BIN_NAME, &mut buffer);

        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("chronicler"));
        assert!(script.contains("update"));
        assert!(script.contains("--heading-style"));
    }

    #[test]
    fn test_completions_to_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = generate_to(Shell::Zsh, &mut command(), BIN_NAME, temp.path()).unwrap();

        assert!(path.starts_with(temp.path()));
        assert!(path.exists());
    }
}
