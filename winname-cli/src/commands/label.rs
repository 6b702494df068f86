//! Label command implementation.
//!
//! Reads `{"context", "path", "group"}` records and prints the shortest
//! distinguishing label for each path.

use crate::error::CliError;
use crate::utils::{load_configuration, read_json, GlobalOptions};
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use winname::{Disambiguator, Label, PathEntry};

/// Shorten paths into distinguishable labels.
#[derive(Args)]
pub struct LabelCommand {
    /// JSON file to read (standard input if omitted)
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: LabelFormat,
}

/// Output format for labels.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LabelFormat {
    /// `context<TAB>label` lines
    Human,
    /// JSON array of `{"context", "label"}` objects
    Json,
}

/// One input record.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LabelRequest {
    context: String,
    path: String,
    #[serde(default)]
    group: Option<String>,
}

/// One output record.
#[derive(Debug, Serialize)]
struct LabelResponse {
    context: String,
    label: String,
}

impl From<Label<String>> for LabelResponse {
    fn from(label: Label<String>) -> Self {
        Self {
            label: label.display_string(),
            context: label.context,
        }
    }
}

impl LabelCommand {
    /// Execute the label command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let requests: Vec<LabelRequest> = read_json(self.input.as_deref())?;

        let entries = requests
            .into_iter()
            .map(|r| PathEntry::parse(r.context, &r.path, r.group))
            .collect::<winname::Result<Vec<_>>>()?;

        log::debug!("labelling {} path(s)", entries.len());

        let labels: Vec<LabelResponse> = Disambiguator::new()
            .with_policy(config.conflict_policy())
            .disambiguate(entries)?
            .into_iter()
            .map(LabelResponse::from)
            .collect();

        match self.format {
            LabelFormat::Human => {
                for label in &labels {
                    println!("{}\t{}", label.context, label.label);
                }
            }
            LabelFormat::Json => {
                let json = serde_json::to_string_pretty(&labels)
                    .map_err(|e| CliError::Library(e.into()))?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
