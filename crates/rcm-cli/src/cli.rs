//! CLI argument definitions for the merge tool.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rcm",
    version,
    about = "Merge REDCap recruiting and questionnaire rows into one table",
    long_about = "Merge recruiting and questionnaire rows from a REDCap patient export\n\
                  into one consolidated table.\n\n\
                  Questionnaire columns that are empty for a whole patient are filled\n\
                  from that patient's recruiting row; re-running against an existing\n\
                  output appends and removes exact duplicate rows.\n\n\
                  Run without --patient-file/--output-file to open the desktop form."
)]
pub struct Cli {
    /// Path to the patient export file (.xlsx, .tsv or .csv).
    #[arg(long = "patient-file", value_name = "PATH")]
    pub patient_file: Option<PathBuf>,

    /// Path to the merged output file (.xlsx, .tsv or .csv).
    #[arg(long = "output-file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Column to keep in the output; repeat for more columns (default: keep all).
    #[arg(short = 'c', long = "column-whitelist", value_name = "COLUMN")]
    pub column_whitelist: Vec<String>,

    /// Field separator for .csv input files.
    #[arg(long = "separator", value_name = "CHAR", default_value = ",")]
    pub separator: char,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

impl Cli {
    /// True when both required paths were supplied; otherwise the desktop
    /// form takes over.
    pub fn is_complete(&self) -> bool {
        self.patient_file.is_some() && self.output_file.is_some()
    }

    /// Whitelist entries as a set. Empty set keeps all columns.
    pub fn whitelist(&self) -> BTreeSet<String> {
        self.column_whitelist
            .iter()
            .map(|entry| entry.trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect()
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
