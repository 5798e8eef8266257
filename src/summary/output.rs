//! Summary file naming and writing.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::SummaryError;
use super::metadata::ExtractedMetadata;
use crate::utils::atomic_write;

/// Suffix shared by every generated summary file name.
pub const SUMMARY_SUFFIX: &str = "-cadence-call-summary.md";

/// `<date>-<customer>-cadence-call-summary.md`, or
/// `<customer>-cadence-call-summary.md` when the meeting is undated.
#[must_use]
pub fn output_filename(metadata: &ExtractedMetadata) -> String {
    match metadata.meeting_date {
        Some(date) => format!("{date}-{}{SUMMARY_SUFFIX}", metadata.customer_name),
        None => format!("{}{SUMMARY_SUFFIX}", metadata.customer_name),
    }
}

/// Append a newline unless the content already ends with one.
#[must_use]
pub fn ensure_trailing_newline(content: &str) -> String {
    let mut owned = content.to_string();
    if !owned.ends_with('\n') {
        owned.push('\n');
    }
    owned
}

/// Write the summary into the meeting directory, replacing any previous one.
///
/// The file name is derived from `metadata` at call time. Returns the path
/// that was written.
pub async fn write_summary(
    meeting_dir: &Path,
    metadata: &ExtractedMetadata,
    content: &str,
) -> Result<PathBuf, SummaryError> {
    let path = meeting_dir.join(output_filename(metadata));
    atomic_write(&path, &ensure_trailing_newline(content))
        .await
        .map_err(|e| SummaryError::io(&path, e))?;

    debug!("Wrote summary to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn metadata_for(path: &str) -> ExtractedMetadata {
        ExtractedMetadata::from_meeting_dir(Path::new(path))
    }

    #[test]
    fn test_output_filename_dated() {
        let metadata = metadata_for("/x/Customers/Acme/2024-01-15");
        assert_eq!(
            output_filename(&metadata),
            "2024-01-15-Acme-cadence-call-summary.md"
        );
    }

    #[test]
    fn test_output_filename_undated() {
        let metadata = metadata_for("/x/Customers/Acme Corp/kickoff");
        assert_eq!(
            output_filename(&metadata),
            "Acme Corp-cadence-call-summary.md"
        );
    }

    #[test]
    fn test_ensure_trailing_newline() {
        assert_eq!(ensure_trailing_newline("# T"), "# T\n");
        assert_eq!(ensure_trailing_newline("# T\n"), "# T\n");
        assert_eq!(ensure_trailing_newline(""), "\n");
    }

    #[tokio::test]
    async fn test_write_summary_creates_and_overwrites() {
        let root = TempDir::new().unwrap();
        let meeting_dir = root.path().join("Customers/Acme/2024-01-15");
        std::fs::create_dir_all(&meeting_dir).unwrap();
        let metadata = ExtractedMetadata::from_meeting_dir(&meeting_dir);

        let path = write_summary(&meeting_dir, &metadata, "# First")
            .await
            .unwrap();
        assert_eq!(
            path,
            meeting_dir.join("2024-01-15-Acme-cadence-call-summary.md")
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# First\n");

        write_summary(&meeting_dir, &metadata, "# Second\n")
            .await
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Second\n");
    }

    #[tokio::test]
    async fn test_write_summary_missing_dir_is_io_error() {
        let root = TempDir::new().unwrap();
        let meeting_dir = root.path().join("gone");
        let metadata = ExtractedMetadata::from_meeting_dir(&meeting_dir);

        let err = write_summary(&meeting_dir, &metadata, "x")
            .await
            .unwrap_err();
        assert!(matches!(err, SummaryError::Io { .. }));
    }
}
