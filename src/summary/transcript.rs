//! Transcript discovery and archiving.
//!
//! A meeting folder holds either the standard `transcript.txt` or, once a
//! summary has been generated, a dated `YYYY-MM-DD-transcript.txt`.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::error::SummaryError;
use super::metadata::MeetingDate;
use crate::utils::file_name_string;

/// Suffix shared by every dated transcript file name.
pub const DATED_TRANSCRIPT_SUFFIX: &str = "-transcript.txt";

/// Human-readable form of the dated transcript name, used in error messages.
pub const DATED_TRANSCRIPT_PATTERN: &str = "YYYY-MM-DD-transcript.txt";

/// Date of a `YYYY-MM-DD-transcript.txt` file name, or `None` for any other
/// name (including `MM-DD-YYYY-transcript.txt` and invalid calendar dates).
#[must_use]
pub fn dated_transcript_date(file_name: &str) -> Option<MeetingDate> {
    file_name
        .strip_suffix(DATED_TRANSCRIPT_SUFFIX)
        .and_then(MeetingDate::parse_strict)
}

/// File name a transcript gets once it is archived under `date`.
#[must_use]
pub fn dated_transcript_name(date: MeetingDate) -> String {
    format!("{date}{DATED_TRANSCRIPT_SUFFIX}")
}

/// Locate the transcript in a meeting directory.
///
/// The standard name always wins. Otherwise the dated transcripts are
/// considered and the latest date is returned.
pub async fn locate_transcript(
    meeting_dir: &Path,
    standard_name: &str,
) -> Result<PathBuf, SummaryError> {
    let standard_path = meeting_dir.join(standard_name);
    if is_file(&standard_path).await {
        debug!("Using standard transcript {}", standard_path.display());
        return Ok(standard_path);
    }

    let mut dated = find_dated_transcripts(meeting_dir).await?;
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    match dated.into_iter().next() {
        Some((date, path)) => {
            debug!("Using dated transcript {} ({date})", path.display());
            Ok(path)
        }
        None => Err(SummaryError::TranscriptNotFound {
            dir: meeting_dir.to_path_buf(),
            standard: standard_name.to_string(),
            dated_pattern: DATED_TRANSCRIPT_PATTERN,
        }),
    }
}

/// Every `*-transcript.txt` entry whose name carries a strict, valid date.
async fn find_dated_transcripts(
    meeting_dir: &Path,
) -> Result<Vec<(MeetingDate, PathBuf)>, SummaryError> {
    let mut entries = fs::read_dir(meeting_dir)
        .await
        .map_err(|e| SummaryError::io(meeting_dir, e))?;

    let mut found = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| SummaryError::io(meeting_dir, e))?
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        let Some(date) = dated_transcript_date(&name) else {
            continue;
        };
        if is_file(&entry.path()).await {
            found.push((date, entry.path()));
        }
    }
    Ok(found)
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|m| m.is_file())
}

/// What the archiver did with the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    /// The transcript now lives at this path.
    Renamed(PathBuf),
    /// The transcript name already carries a date.
    AlreadyDated,
    /// No date could be derived from the meeting directory.
    Undated,
}

/// Rename a transcript to `<date>-transcript.txt` in its own directory.
///
/// Never overwrites: an existing dated transcript is a conflict and the
/// original file is left in place.
pub async fn archive_transcript(
    transcript_path: &Path,
    date: Option<MeetingDate>,
) -> Result<ArchiveOutcome, SummaryError> {
    if dated_transcript_date(&file_name_string(transcript_path)).is_some() {
        return Ok(ArchiveOutcome::AlreadyDated);
    }
    let Some(meeting_date) = date else {
        return Ok(ArchiveOutcome::Undated);
    };

    let new_path = transcript_path.with_file_name(dated_transcript_name(meeting_date));
    let exists = fs::try_exists(&new_path)
        .await
        .map_err(|e| SummaryError::io(&new_path, e))?;
    if exists {
        return Err(SummaryError::RenameConflict { path: new_path });
    }

    fs::rename(transcript_path, &new_path)
        .await
        .map_err(|source| SummaryError::RenameFailed {
            from: transcript_path.to_path_buf(),
            to: new_path.clone(),
            source,
        })?;

    debug!(
        "Renamed transcript {} -> {}",
        transcript_path.display(),
        new_path.display()
    );
    Ok(ArchiveOutcome::Renamed(new_path))
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod tests;
