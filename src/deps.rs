//! External command availability.

use std::path::PathBuf;

/// Optional tool reported by `meetsum check`.
pub const GIT_COMMAND: &str = "git";

/// Resolve a command on `PATH`. Paths containing a separator are checked
/// directly.
#[must_use]
pub fn find_command(command: &str) -> Option<PathBuf> {
    which::which(command).ok()
}

/// Check if a command exists and is executable
#[must_use]
pub fn command_available(command: &str) -> bool {
    find_command(command).is_some()
}
