mod atomic;

pub use atomic::atomic_write;

use std::path::{Component, Path, PathBuf};

/// Expand a leading `~/` to the user's home directory.
///
/// Paths without the prefix, or when the home directory cannot be
/// determined, are returned unchanged.
#[must_use]
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Lexically drop `.` and resolve `..` against the preceding component.
///
/// Symlinks are not followed. A `..` at the root stays at the root.
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::CurDir | Component::ParentDir) | None => {
                    cleaned.push(Component::ParentDir);
                }
            },
            other => cleaned.push(other),
        }
    }
    cleaned
}

/// Format a path for display, replacing home directory with ~/
#[must_use]
pub fn format_display_path(path: &Path) -> String {
    replace_homedir::replace_homedir(&path.to_string_lossy(), "~")
}

/// Base name of a path as an owned string (empty when there is none).
#[must_use]
pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
