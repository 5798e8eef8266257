//! User configuration loaded from `settings.toml`.
//!
//! Every section and field is optional; anything missing falls back to its
//! default, and an absent file means all defaults.

mod loader;
pub use loader::{config_search_paths, load_config, load_config_from};
use crate::logging::{parse_rotation, LogConfig, LogOutput};
use crate::summary::sanitize::{SanitizeRules, TitleMarker};
use crate::utils::expand_home;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

/// Name of the configuration file in every search location.
pub const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config TOML in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid ai.timeout '{value}': {source}")]
    Timeout {
        value: String,
        source: humantime::DurationError,
    },
    #[error("Invalid logging.level '{value}' (expected debug, info, warn or error)")]
    LogLevel { value: String },
}

/// `[paths]`: where meeting folders and the AI instructions live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    pub file_browser_root_dir: String,
    pub automation_dir: String,
    pub instructions_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            file_browser_root_dir: "~/Documents/Company/Customers".to_string(),
            automation_dir: "~/Documents/Company/automation/summaries".to_string(),
            instructions_file: "Meeting-summary-llm-instructions.md".to_string(),
        }
    }
}

/// `[files]`: file names looked up inside a meeting folder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilesConfig {
    pub transcript: String,
    pub pov_input: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            transcript: "transcript.txt".to_string(),
            pov_input: "pov-input.md".to_string(),
        }
    }
}

/// `[ai]`: the external command and how long it may run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AiConfig {
    pub command: String,
    /// Humantime duration; `0s` disables the limit.
    pub timeout: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            command: "gemini".to_string(),
            timeout: "10m".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeaturesConfig {
    pub trace_mode: bool,
}

/// `[logging]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub output: LogOutput,
    pub dir: String,
    pub json: bool,
    pub rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            output: LogOutput::Screen,
            dir: "~/.config/meetsum/logs".to_string(),
            json: false,
            rotation: "never".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserSection {
    /// Summaries are written from this person's perspective.
    pub name: String,
}

/// `[sanitizer]`: markers added to the built-in output cleanup rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SanitizerConfig {
    pub extra_noise_markers: Vec<String>,
    /// Lines containing one of these start an unfenced summary.
    pub extra_title_markers: Vec<String>,
}

/// Top-level configuration, deserialized from `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MeetsumConfig {
    pub paths: PathsConfig,
    pub files: FilesConfig,
    pub ai: AiConfig,
    pub features: FeaturesConfig,
    pub logging: LoggingConfig,
    pub user: UserSection,
    pub sanitizer: SanitizerConfig,
}

impl MeetsumConfig {
    /// Parse configuration from TOML text. `origin` is only used in errors.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, UserConfigError> {
        toml::from_str(content).map_err(|source| UserConfigError::Toml {
            path: origin.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn automation_dir(&self) -> PathBuf {
        expand_home(&self.paths.automation_dir)
    }

    #[must_use]
    pub fn file_browser_root_dir(&self) -> PathBuf {
        expand_home(&self.paths.file_browser_root_dir)
    }

    /// `<automation_dir>/<instructions_file>`
    #[must_use]
    pub fn instructions_path(&self) -> PathBuf {
        self.automation_dir().join(&self.paths.instructions_file)
    }

    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        expand_home(&self.logging.dir)
    }

    /// The AI timeout, or `None` when it is disabled with a zero duration.
    pub fn ai_timeout(&self) -> Result<Option<Duration>, UserConfigError> {
        let value = self.ai.timeout.trim();
        let timeout = humantime::parse_duration(value).map_err(|source| {
            UserConfigError::Timeout {
                value: value.to_string(),
                source,
            }
        })?;
        Ok(Some(timeout).filter(|t| !t.is_zero()))
    }

    pub fn log_level(&self) -> Result<Level, UserConfigError> {
        match self.logging.level.trim().to_lowercase().as_str() {
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" | "warning" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => Err(UserConfigError::LogLevel {
                value: self.logging.level.clone(),
            }),
        }
    }

    /// Logging setup for this run. Trace mode forces debug level.
    pub fn log_config(&self, trace_mode: bool) -> Result<LogConfig, UserConfigError> {
        let log_level = if trace_mode {
            Level::DEBUG
        } else {
            self.log_level()?
        };
        Ok(LogConfig {
            log_dir: self.log_dir(),
            log_level,
            output: self.logging.output,
            json_format: self.logging.json,
            rotation: parse_rotation(&self.logging.rotation),
        })
    }

    /// Built-in sanitizer rules extended with the configured markers.
    #[must_use]
    pub fn sanitize_rules(&self) -> SanitizeRules {
        let with_noise = self
            .sanitizer
            .extra_noise_markers
            .iter()
            .fold(SanitizeRules::default(), |rules, marker| {
                rules.with_noise_marker(marker)
            });
        self.sanitizer
            .extra_title_markers
            .iter()
            .filter(|marker| !marker.is_empty())
            .fold(with_noise, |rules, marker| {
                rules.with_title_marker(TitleMarker::Contains(marker.clone()))
            })
    }
}

#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;
