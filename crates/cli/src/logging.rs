//! Console and file log sinks.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log verbosity. Numeric levels (10 to 50) are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    #[value(alias = "10")]
    Debug,
    #[value(alias = "20")]
    Info,
    #[value(aliases = ["30", "warning"])]
    Warn,
    #[value(aliases = ["40", "50", "critical"])]
    Error,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging options.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Log level for every enabled sink
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log level for the console. Using this force-enables console logging
    #[arg(long = "log-level-cli", value_enum)]
    pub log_level_cli: Option<LogLevel>,

    /// Log level for the log file. Using this force-enables file logging
    #[arg(long = "log-level-file", value_enum)]
    pub log_level_file: Option<LogLevel>,

    /// Skip console logging
    #[arg(long = "log-no-cli")]
    pub log_no_cli: bool,

    /// Activate logging to file
    #[arg(long = "log-in-file")]
    pub log_in_file: bool,

    /// Log file path
    #[arg(long = "log-file", value_name = "PATH", default_value = "peaktable.log")]
    pub log_file: PathBuf,
}

/// Resolved sink configuration. `None` disables a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Console level; `Some(None)` defers to `RUST_LOG`, falling back to info.
    pub console: Option<Option<LogLevel>>,
    pub file: Option<(PathBuf, LogLevel)>,
}

impl LogSettings {
    /// Apply the precedence rules: a sink-specific level beats `--log-level`,
    /// and naming a sink-specific level switches that sink on.
    #[must_use]
    pub fn from_args(args: &LogArgs) -> Self {
        let console = (!args.log_no_cli || args.log_level_cli.is_some())
            .then(|| args.log_level_cli.or(args.log_level));

        let file = (args.log_in_file || args.log_level_file.is_some()).then(|| {
            let level = args
                .log_level_file
                .or(args.log_level)
                .unwrap_or(LogLevel::Debug);
            (args.log_file.clone(), level)
        });

        LogSettings { console, file }
    }

    /// Install the global subscriber.
    pub fn init(&self) -> Result<()> {
        let console = self.console.map(|level| {
            let filter = match level {
                Some(level) => EnvFilter::new(level.directive()),
                None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            };
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter)
        });

        let file = match &self.file {
            Some((path, level)) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?;
                Some(
                    fmt::layer()
                        .with_writer(Arc::new(file))
                        .with_ansi(false)
                        .with_file(true)
                        .with_line_number(true)
                        .with_filter(EnvFilter::new(level.directive())),
                )
            }
            None => None,
        };

        tracing_subscriber::registry()
            .with(console)
            .with(file)
            .try_init()
            .context("Failed to initialize logging")
    }
}
