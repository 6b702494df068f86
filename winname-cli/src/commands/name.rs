//! Name command implementation.
//!
//! Reads window descriptions and prints the names they should carry.

use crate::error::CliError;
use crate::utils::{load_configuration, read_json, GlobalOptions};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use winname::output::{OutputFormat, OutputFormatter};
use winname::{Window, WindowNamer};

/// Plan names for terminal windows.
#[derive(Args)]
pub struct NameCommand {
    /// JSON file to read (standard input if omitted)
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormatArg,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// `id<TAB>name` lines
    Human,
    /// JSON array of `{"id", "name"}` objects
    Json,
    /// tmux commands for `tmux source-file -`
    Tmux,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Tmux => OutputFormat::Tmux,
        }
    }
}

impl NameCommand {
    /// Execute the name command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let windows: Vec<Window> = read_json(self.input.as_deref())?;

        log::debug!("naming {} window(s)", windows.len());

        let names = WindowNamer::new(&config).plan(windows)?;
        let output = OutputFormat::from(self.format)
            .create_formatter()
            .format(&names)?;

        if !output.is_empty() {
            println!("{output}");
        }

        Ok(())
    }
}
