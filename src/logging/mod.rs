mod init;
pub use init::{init_logging, parse_rotation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::rolling::Rotation;

/// Log filename written inside the configured log directory.
pub const LOG_FILENAME: &str = "meetsum.log";

/// Global log file path, set once at startup when file logging is enabled.
static LOG_FILE_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Remember the log file path so error hints can point at it.
pub fn set_log_file_path(path: PathBuf) {
    if LOG_FILE_PATH.set(path).is_err() {
        tracing::debug!("Log file path already set");
    }
}

/// The log file path set at startup, if file logging is enabled.
#[must_use]
pub fn log_file_path() -> Option<&'static Path> {
    LOG_FILE_PATH.get().map(PathBuf::as_path)
}

/// Where log events are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// Standard error only.
    #[default]
    Screen,
    /// The rolling log file only.
    File,
    /// Both standard error and the log file.
    Both,
}

impl LogOutput {
    #[must_use]
    pub fn writes_screen(self) -> bool {
        matches!(self, Self::Screen | Self::Both)
    }

    #[must_use]
    pub fn writes_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

impl fmt::Display for LogOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Screen => "screen",
            Self::File => "file",
            Self::Both => "both",
        };
        f.write_str(name)
    }
}

/// Configuration for the logging system.
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub output: LogOutput,
    pub json_format: bool,
    pub rotation: Rotation,
}

impl LogConfig {
    /// Full path of the log file (before any rotation suffix).
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILENAME)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        let log_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("meetsum")
            .join("logs");
        Self {
            log_dir,
            log_level: Level::INFO,
            output: LogOutput::Screen,
            json_format: false,
            rotation: Rotation::NEVER,
        }
    }
}

#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
