//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Three destinations share one subscriber: stderr (formatted per the CLI
//! flags), the per-run log file (via the swappable `RunLogWriter` slot, empty
//! between runs), and optionally the desktop form's log panel.

use std::io::{self, IsTerminal};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use rcm_core::RunLogWriter;
use rcm_gui::LogPanelBuffer;

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter applied to all destinations.
    pub level_filter: LevelFilter,
    /// Output format for the stderr destination.
    pub format: LogFormat,
    /// Whether to use ANSI colors on stderr.
    pub with_ansi: bool,
    /// Whether `RUST_LOG` may override the configured level.
    pub use_env_filter: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            format: LogFormat::default(),
            with_ansi: io::stderr().is_terminal(),
            use_env_filter: true,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

/// Initialize the global tracing subscriber.
///
/// Called once at startup. The run-log file layer is always installed; its
/// writes go nowhere until a conversion attaches a file. The panel layer is
/// installed only when the desktop form is about to run.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_logging(config: &LogConfig, run_log: &RunLogWriter, panel: Option<LogPanelBuffer>) {
    let filter = build_env_filter(config);

    match config.format {
        LogFormat::Json => {
            let file_layer = fmt::layer()
                .with_writer(run_log.clone())
                .with_ansi(false)
                .with_target(false)
                .without_time();
            let panel_layer = panel.map(|panel| {
                fmt::layer()
                    .with_writer(panel)
                    .with_ansi(false)
                    .with_target(false)
                    .without_time()
            });
            let stderr_layer = fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_target(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .with(panel_layer)
                .init();
        }
        LogFormat::Compact => {
            let file_layer = fmt::layer()
                .with_writer(run_log.clone())
                .with_ansi(false)
                .with_target(false)
                .without_time();
            let panel_layer = panel.map(|panel| {
                fmt::layer()
                    .with_writer(panel)
                    .with_ansi(false)
                    .with_target(false)
                    .without_time()
            });
            let stderr_layer = fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .with(panel_layer)
                .init();
        }
        LogFormat::Pretty => {
            let file_layer = fmt::layer()
                .with_writer(run_log.clone())
                .with_ansi(false)
                .with_target(false)
                .without_time();
            let panel_layer = panel.map(|panel| {
                fmt::layer()
                    .with_writer(panel)
                    .with_ansi(false)
                    .with_target(false)
                    .without_time()
            });
            let stderr_layer = fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .with(panel_layer)
                .init();
        }
    }
}

/// Build an `EnvFilter` from the configured level, respecting `RUST_LOG`
/// unless an explicit level was requested.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let level = config.level_filter.to_string().to_lowercase();
    let default_directives = format!(
        "warn,rcm_cli={level},rcm_core={level},rcm_gui={level},rcm_ingest={level},rcm_model={level}",
    );
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
    } else {
        EnvFilter::new(default_directives)
    }
}
