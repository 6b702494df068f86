//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "winname";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            Self::print_instructions(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }

    fn print_instructions(shell: Shell) {
        eprintln!("# Generating {shell} completion script");
        match shell {
            Shell::Bash => {
                eprintln!(
                    "#   winname completions bash > ~/.local/share/bash-completion/completions/winname"
                );
                eprintln!("# Or add to ~/.bashrc:");
                eprintln!("#   eval \"$(winname completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   winname completions zsh > ~/.zsh/completions/_winname");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            }
            Shell::Fish => {
                eprintln!("#   winname completions fish > ~/.config/fish/completions/winname.fish");
            }
            Shell::PowerShell => {
                eprintln!("#   winname completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }
        eprintln!();
    }
}
