//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::{note, GlobalOptions};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Binary name as installed
const BIN_NAME: &str = "e2e-env";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        let hint = match self.shell {
            Shell::Bash => Some(
                "e2e-env completions bash > ~/.local/share/bash-completion/completions/e2e-env",
            ),
            Shell::Zsh => Some("e2e-env completions zsh > ~/.zsh/completions/_e2e-env"),
            Shell::Fish => {
                Some("e2e-env completions fish > ~/.config/fish/completions/e2e-env.fish")
            }
            Shell::PowerShell => Some("e2e-env completions powershell >> $PROFILE"),
            _ => None,
        };
        if let Some(hint) = hint {
            note(global, &format!("# Install with:\n#   {hint}"));
        }

        let mut script = Vec::new();
        generate(self.shell, &mut cmd, BIN_NAME, &mut script);

        let mut out = io::stdout().lock();
        out.write_all(&script)?;
        out.flush()?;
        Ok(())
    }
}
