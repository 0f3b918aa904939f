//! Command-line argument parsing for the harness
//!
//! Supports:
//! - Loading a table from JSON/YAML table files or CSV/TSV data
//! - Replaying an interaction script against it
//! - Printing the resulting grid and host events

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Drive a grid editing engine from the command line
#[derive(Parser, Debug)]
#[command(
    name = "celltable",
    version,
    about = "Replay interaction scripts against a spreadsheet-style table"
)]
pub struct CliArgs {
    /// Table file (.json, .yaml/.yml) or delimited data (.csv, .tsv, .psv)
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Interaction script to replay (see `celltable::script`)
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Allow adding and deleting rows and columns on CSV input
    #[arg(long)]
    pub permissive: bool,

    /// Print the host notifications the run produced
    #[arg(long)]
    pub events: bool,

    /// Output format for the final grid
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Don't touch the OS clipboard
    #[arg(long)]
    pub no_system_clipboard: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns
    Text,
    Csv,
    /// Full table file including headers and flags
    Json,
}

/// How the table file should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Yaml,
    Delimited,
}

impl TableFormat {
    /// Pick a format from the file extension; unknown extensions are
    /// treated as delimited data
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("json") => TableFormat::Json,
            Some("yaml") | Some("yml") => TableFormat::Yaml,
            _ => TableFormat::Delimited,
        }
    }
}
