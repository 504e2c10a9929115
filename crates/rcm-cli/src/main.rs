//! REDCap recruiting/questionnaire merge CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::error;
use tracing::level_filters::LevelFilter;

use rcm_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use rcm_cli::logging::{LogConfig, LogFormat, init_logging};
use rcm_cli::summary::print_summary;
use rcm_core::{RunLogWriter, convert};
use rcm_gui::LogPanelBuffer;
use rcm_model::MergeOptions;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let run_log = RunLogWriter::new();
    let panel = (!cli.is_complete()).then(LogPanelBuffer::default);
    init_logging(&log_config_from_cli(&cli), &run_log, panel.clone());

    let exit_code = if cli.is_complete() {
        run_merge(&cli, &run_log)
    } else {
        match rcm_gui::run(run_log, panel.unwrap_or_default()) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        }
    };
    std::process::exit(exit_code);
}

fn run_merge(cli: &Cli, run_log: &RunLogWriter) -> i32 {
    let (Some(patient_file), Some(output_file)) = (&cli.patient_file, &cli.output_file) else {
        return 2;
    };
    if !cli.separator.is_ascii() {
        eprintln!("error: --separator must be a single ASCII character");
        return 2;
    }
    let options = MergeOptions::new(patient_file, output_file)
        .with_whitelist(cli.whitelist())
        .with_separator(cli.separator as u8);
    match convert(&options, run_log) {
        Ok(summary) => {
            print_summary(&summary);
            0
        }
        Err(error) => {
            error!("{error}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
