//! Build script for winname-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is described here by hand.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("winname")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Name terminal windows after their working directories")
        .long_about(
            "Compute short, distinguishable names for terminal windows from their \
             working directories and running programs",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read this configuration file in addition to the user config")
                .value_name("PATH")
                .global(true)
                .env("WINNAME_CONFIG"),
        )
        .subcommands(vec![
            Command::new("label")
                .about("Shorten paths into distinguishable labels")
                .long_about("Read path records as JSON and print the shortest distinguishing label for each"),
            Command::new("name")
                .about("Plan names for terminal windows")
                .long_about("Read window descriptions as JSON and print their names or tmux commands"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a winname configuration file for errors"),
            Command::new("show-config")
                .about("Print the effective configuration")
                .long_about("Print the merged configuration, with defaults filled in, as YAML"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR").ok_or_else(|| io::Error::other("OUT_DIR is not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("winname.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
