//! Atomic file replacement for summary output.
//!
//! The summary file is either fully written or left untouched, so an
//! interrupted run never leaves a half-written summary behind.

use std::io;
use std::path::{Path, PathBuf};
use tempfile::Builder;

const TEMP_PREFIX: &str = ".meetsum-";
const TEMP_SUFFIX: &str = ".tmp";

/// Replace `path` with `content` through a synced temp file in the same
/// directory.
///
/// A bare file name is written relative to the current directory. An
/// existing directory at `path` is rejected before anything is created.
///
/// # Errors
///
/// `InvalidInput` when `path` names a directory or has no file name;
/// otherwise whatever creating, syncing or renaming the temp file reports.
pub async fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let target = path.to_path_buf();
    let bytes = content.as_bytes().to_vec();

    tokio::task::spawn_blocking(move || replace_file(&target, &bytes))
        .await
        .map_err(io::Error::other)?
}

fn replace_file(target: &Path, bytes: &[u8]) -> io::Result<()> {
    use std::io::Write as _;

    if target.file_name().is_none() || target.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a file path", target.display()),
        ));
    }
    let dir = staging_dir(target);

    let mut staged = Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(&dir)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;
    staged.persist(target).map_err(|e| e.error)?;
    Ok(())
}

/// Directory the temp file is staged in; the rename is only atomic within
/// one filesystem.
fn staging_dir(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        Some(_) | None => PathBuf::from("."),
    }
}
