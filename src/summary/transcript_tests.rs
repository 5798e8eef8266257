use super::*;
use std::fs as std_fs;
use tempfile::TempDir;

const STANDARD: &str = "transcript.txt";

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std_fs::write(&path, content).unwrap();
    path
}

fn dated_dir(base: &TempDir, date: &str) -> PathBuf {
    let dir = base.path().join(date);
    std_fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_dated_transcript_date_valid() {
    let date = dated_transcript_date("2026-02-04-transcript.txt").unwrap();
    assert_eq!(date.to_string(), "2026-02-04");
}

#[test]
fn test_dated_transcript_date_rejects_other_shapes() {
    assert!(dated_transcript_date("02-04-2026-transcript.txt").is_none());
    assert!(dated_transcript_date("2026-2-04-transcript.txt").is_none());
    assert!(dated_transcript_date("2026-02-30-transcript.txt").is_none());
    assert!(dated_transcript_date("kickoff-transcript.txt").is_none());
    assert!(dated_transcript_date("2026-02-04-transcript.txt.bak").is_none());
    assert!(dated_transcript_date("x2026-02-04-transcript.txt").is_none());
    assert!(dated_transcript_date("transcript.txt").is_none());
}

#[test]
fn test_dated_transcript_name() {
    let date = MeetingDate::parse_strict("2024-01-15").unwrap();
    assert_eq!(dated_transcript_name(date), "2024-01-15-transcript.txt");
}

#[tokio::test]
async fn test_locate_standard_transcript() {
    let dir = TempDir::new().unwrap();
    let expected = write(dir.path(), STANDARD, "hello");

    let found = locate_transcript(dir.path(), STANDARD).await.unwrap();
    assert_eq!(found, expected);
}

#[tokio::test]
async fn test_locate_dated_when_standard_missing() {
    let dir = TempDir::new().unwrap();
    let expected = write(dir.path(), "2026-02-04-transcript.txt", "dated");

    let found = locate_transcript(dir.path(), STANDARD).await.unwrap();
    assert_eq!(found, expected);
}

#[tokio::test]
async fn test_locate_prefers_standard_over_dated() {
    let dir = TempDir::new().unwrap();
    let standard = write(dir.path(), STANDARD, "standard");
    write(dir.path(), "2026-02-04-transcript.txt", "dated");

    let found = locate_transcript(dir.path(), STANDARD).await.unwrap();
    assert_eq!(found, standard);
}

#[tokio::test]
async fn test_locate_ignores_wrong_field_order() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "02-04-2026-transcript.txt", "invalid");

    let err = locate_transcript(dir.path(), STANDARD).await.unwrap_err();
    assert!(matches!(err, SummaryError::TranscriptNotFound { .. }));
}

#[tokio::test]
async fn test_locate_ignores_invalid_calendar_date() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "2026-13-45-transcript.txt", "invalid");

    let result = locate_transcript(dir.path(), STANDARD).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_locate_latest_dated_transcript_wins() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "2025-12-01-transcript.txt", "older");
    let latest = write(dir.path(), "2026-02-04-transcript.txt", "latest");
    write(dir.path(), "2026-01-10-transcript.txt", "middle");

    let found = locate_transcript(dir.path(), STANDARD).await.unwrap();
    assert_eq!(found, latest);
}

#[tokio::test]
async fn test_locate_ignores_directories() {
    let dir = TempDir::new().unwrap();
    std_fs::create_dir(dir.path().join(STANDARD)).unwrap();
    std_fs::create_dir(dir.path().join("2026-02-04-transcript.txt")).unwrap();

    let result = locate_transcript(dir.path(), STANDARD).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_locate_custom_standard_name() {
    let dir = TempDir::new().unwrap();
    let expected = write(dir.path(), "call.txt", "custom");
    write(dir.path(), "2026-02-04-transcript.txt", "dated");

    let found = locate_transcript(dir.path(), "call.txt").await.unwrap();
    assert_eq!(found, expected);
}

#[tokio::test]
async fn test_locate_not_found_error_lists_patterns() {
    let dir = TempDir::new().unwrap();

    let err = locate_transcript(dir.path(), STANDARD).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains(STANDARD));
    assert!(message.contains(DATED_TRANSCRIPT_PATTERN));
}

#[tokio::test]
async fn test_locate_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    let err = locate_transcript(&missing, STANDARD).await.unwrap_err();
    assert!(matches!(err, SummaryError::Io { .. }));
}

#[tokio::test]
async fn test_archive_renames_standard_transcript() {
    let base = TempDir::new().unwrap();
    let dir = dated_dir(&base, "2026-02-04");
    let transcript = write(&dir, STANDARD, "test");
    let date = MeetingDate::parse_strict("2026-02-04");

    let outcome = archive_transcript(&transcript, date).await.unwrap();

    let expected = dir.join("2026-02-04-transcript.txt");
    assert_eq!(outcome, ArchiveOutcome::Renamed(expected.clone()));
    assert!(expected.exists());
    assert!(!transcript.exists());
}

#[tokio::test]
async fn test_archive_skips_already_dated() {
    let base = TempDir::new().unwrap();
    let dir = dated_dir(&base, "2026-02-04");
    let transcript = write(&dir, "2026-02-01-transcript.txt", "test");
    let date = MeetingDate::parse_strict("2026-02-04");

    let outcome = archive_transcript(&transcript, date).await.unwrap();

    assert_eq!(outcome, ArchiveOutcome::AlreadyDated);
    assert!(transcript.exists());
}

#[tokio::test]
async fn test_archive_skips_when_undated() {
    let dir = TempDir::new().unwrap();
    let transcript = write(dir.path(), STANDARD, "test");

    let outcome = archive_transcript(&transcript, None).await.unwrap();

    assert_eq!(outcome, ArchiveOutcome::Undated);
    assert!(transcript.exists());
}

#[tokio::test]
async fn test_archive_conflict_leaves_files_untouched() {
    let base = TempDir::new().unwrap();
    let dir = dated_dir(&base, "2026-02-04");
    let transcript = write(&dir, STANDARD, "original");
    let existing = write(&dir, "2026-02-04-transcript.txt", "existing");
    let date = MeetingDate::parse_strict("2026-02-04");

    let err = archive_transcript(&transcript, date).await.unwrap_err();

    assert!(matches!(err, SummaryError::RenameConflict { .. }));
    assert_eq!(std_fs::read_to_string(&transcript).unwrap(), "original");
    assert_eq!(std_fs::read_to_string(&existing).unwrap(), "existing");
}

#[tokio::test]
async fn test_archive_missing_source_is_rename_failed() {
    let dir = TempDir::new().unwrap();
    let transcript = dir.path().join(STANDARD);
    let date = MeetingDate::parse_strict("2026-02-04");

    let err = archive_transcript(&transcript, date).await.unwrap_err();
    assert!(matches!(err, SummaryError::RenameFailed { .. }));
}

#[tokio::test]
async fn test_archive_then_locate_finds_renamed_file() {
    let base = TempDir::new().unwrap();
    let dir = dated_dir(&base, "2026-02-04");
    let transcript = write(&dir, STANDARD, "round trip");
    let date = MeetingDate::parse_strict("2026-02-04");

    let ArchiveOutcome::Renamed(renamed) = archive_transcript(&transcript, date).await.unwrap()
    else {
        panic!("expected the transcript to be renamed");
    };

    let found = locate_transcript(&dir, STANDARD).await.unwrap();
    assert_eq!(found, renamed);
    assert_eq!(std_fs::read_to_string(found).unwrap(), "round trip");
}
