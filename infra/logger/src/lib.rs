//! # Logger
//!
//! Installs the process-wide `tracing` subscriber used by every Podium binary.
//!
//! * Console output is compact and coloured, on stderr so stdout stays free for command output.
//! * File output goes through a non-blocking rolling appender; it can be plain text or JSON.
//! * `RUST_LOG` is honoured; [`LoggerBuilder::env_filter`] sets a programmatic default instead.
//!
//! ## Example
//!
//! ```rust
//! use podium_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("podium-docs")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// File sink settings. Only present when a log directory was configured.
#[derive(Debug, Clone)]
struct FileSink {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

/// Builder for the global subscriber. Create it with [`Logger::builder`].
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileSink>,
}

impl LoggerBuilder {
    /// Minimum level emitted when neither `RUST_LOG` nor an env filter says otherwise.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Default directives such as `podium_scheduling=debug,config=warn`.
    ///
    /// A malformed filter makes [`LoggerBuilder::init`] fail.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes rolling log files named `<name>.<date>.log` into `directory`.
    #[must_use]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        let sink = self.file.take().unwrap_or_else(|| FileSink {
            directory: PathBuf::new(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self.file = Some(FileSink { directory: directory.into(), ..sink });
        self
    }

    /// Rotation policy for file output. Ignored without [`LoggerBuilder::directory`].
    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(sink) = self.file.as_mut() {
            sink.rotation = rotation;
        }
        self
    }

    /// How many rotated files to keep. Ignored without [`LoggerBuilder::directory`].
    #[must_use]
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(sink) = self.file.as_mut() {
            sink.max_files = max;
        }
        self
    }

    /// Emits file output as JSON lines. Ignored without [`LoggerBuilder::directory`].
    #[must_use]
    pub fn json(mut self, enabled: bool) -> Self {
        if let Some(sink) = self.file.as_mut() {
            sink.json = enabled;
        }
        self
    }

    /// Installs the subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's worker guard; keep it alive until
    /// shutdown or buffered lines are lost.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   a malformed env filter, or when no output is enabled.
    /// * [`LoggerError::Appender`] if the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] if a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;

        let filter = self.build_filter()?;
        let mut layers = Vec::new();

        if self.console {
            layers.push(
                layer()
                    .compact()
                    .with_ansi(true)
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .boxed(),
            );
        }

        let guard = match &self.file {
            Some(sink) => {
                let (writer, guard) = open_appender(&self.name, sink)?;
                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if sink.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no output enabled, turn on the console or set a log directory".into(),
                context: None,
            });
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(layers)
            .try_init()
            .context("Installing global subscriber")?;

        tracing::debug!(logger = %self.name, "Logger initialized");

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "logger name cannot be empty".into(),
                context: None,
            });
        }
        if self.file.as_ref().is_some_and(|sink| sink.max_files == 0) {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: Some(self.name.clone().into()),
            });
        }
        Ok(())
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            None => Ok(builder.from_env_lossy()),
            Some(directives) => {
                builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("invalid env filter '{directives}': {e}").into(),
                    context: None,
                })
            },
        }
    }
}

fn open_appender(
    name: &str,
    sink: &FileSink,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), LoggerError> {
    fs::create_dir_all(&sink.directory).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Creating log directory {}", sink.directory.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(sink.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(sink.max_files)
        .build(&sink.directory)?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Parses a level name from configuration (`"trace"`, `"info"`, `"off"`, ...).
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown names.
pub fn parse_level(name: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(name.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("unknown log level '{name}': {e}").into(),
        context: None,
    })
}

/// Handle to the installed subscriber.
///
/// Dropping it stops the background file writer after flushing.
#[must_use = "dropping the logger stops background file logging"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring a logger. `name` prefixes rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            file: None,
        }
    }

    /// `true` when file output is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }

    /// Lists the `.log` files in `directory`, sorted by name.
    #[must_use]
    pub fn log_files(directory: &Path) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(directory) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some(LOG_FILE_SUFFIX))
            .collect();
        files.sort();
        files
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log files before shutdown");
        }
    }
}
