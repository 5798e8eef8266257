use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error(
        "No transcript file found in {} (looked for {standard} and {dated_pattern})",
        .dir.display()
    )]
    TranscriptNotFound {
        dir: PathBuf,
        standard: String,
        dated_pattern: &'static str,
    },

    #[error("Instructions file not found at {}", .path.display())]
    InstructionsNotFound { path: PathBuf },

    #[error("AI command '{command}' failed: {reason}{}", stderr_suffix(.stderr))]
    AiInvocationFailed {
        command: String,
        reason: String,
        stderr: String,
    },

    #[error("AI command produced no usable summary output")]
    EmptySummary,

    #[error("Cannot rename transcript: {} already exists", .path.display())]
    RenameConflict { path: PathBuf },

    #[error("Failed to rename transcript {} to {}: {source}", .from.display(), .to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SummaryError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(" (stderr: {trimmed})")
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
