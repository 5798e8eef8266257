//! Per-run orchestration of the summary pipeline.

use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tracing::{debug, error, info, warn};

use super::error::SummaryError;
use super::invoke::invoke_ai;
use super::metadata::ExtractedMetadata;
use super::output::write_summary;
use super::prompt::{
    compose_prompt, context_path, load_context, load_instructions, load_transcript,
};
use super::sanitize::{sanitize_output, SanitizeRules};
use super::transcript::{archive_transcript, locate_transcript, ArchiveOutcome};
use crate::user_config::{MeetsumConfig, UserConfigError};

const PROMPT_PREVIEW_CHARS: usize = 200;

/// The meeting being processed in this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingContext {
    pub meeting_dir: PathBuf,
    pub user_name: String,
    /// Set once the transcript is located; updated after archiving.
    pub transcript_path: Option<PathBuf>,
}

/// Settings the pipeline needs, resolved from [`MeetsumConfig`].
#[derive(Debug, Clone)]
pub struct SummarySettings {
    pub ai_command: String,
    pub ai_timeout: Option<Duration>,
    pub instructions_path: PathBuf,
    pub transcript_name: String,
    pub context_name: String,
    pub rules: SanitizeRules,
}

impl SummarySettings {
    pub fn from_config(config: &MeetsumConfig) -> Result<Self, UserConfigError> {
        Ok(Self {
            ai_command: config.ai.command.clone(),
            ai_timeout: config.ai_timeout()?,
            instructions_path: config.instructions_path(),
            transcript_name: config.files.transcript.clone(),
            context_name: config.files.pov_input.clone(),
            rules: config.sanitize_rules(),
        })
    }
}

/// Sequences the pipeline for one meeting directory.
#[derive(Debug)]
pub struct Processor {
    settings: SummarySettings,
    context: MeetingContext,
}

impl Processor {
    #[must_use]
    pub fn new(settings: SummarySettings, user_name: &str, meeting_dir: &Path) -> Self {
        Self {
            settings,
            context: MeetingContext {
                meeting_dir: meeting_dir.to_path_buf(),
                user_name: user_name.to_string(),
                transcript_path: None,
            },
        }
    }

    #[must_use]
    pub fn context(&self) -> &MeetingContext {
        &self.context
    }

    #[must_use]
    pub fn settings(&self) -> &SummarySettings {
        &self.settings
    }

    /// Metadata for the meeting directory, derived fresh on every call.
    #[must_use]
    pub fn metadata(&self) -> ExtractedMetadata {
        ExtractedMetadata::from_meeting_dir(&self.context.meeting_dir)
    }

    /// The transcript for this meeting, located on first use.
    pub async fn transcript_path(&mut self) -> Result<PathBuf, SummaryError> {
        if let Some(path) = &self.context.transcript_path {
            return Ok(path.clone());
        }
        let path =
            locate_transcript(&self.context.meeting_dir, &self.settings.transcript_name).await?;
        self.context.transcript_path = Some(path.clone());
        Ok(path)
    }

    /// Check that a transcript can be located and the instructions file
    /// exists. Returns the transcript path.
    pub async fn validate_required_files(&mut self) -> Result<PathBuf, SummaryError> {
        let transcript = self.transcript_path().await?;
        let instructions = &self.settings.instructions_path;
        if !fs::metadata(instructions).await.is_ok_and(|m| m.is_file()) {
            return Err(SummaryError::InstructionsNotFound {
                path: instructions.clone(),
            });
        }
        Ok(transcript)
    }

    /// Optional files present in the meeting directory.
    pub async fn optional_files(&self) -> Vec<PathBuf> {
        let context_path = context_path(&self.context.meeting_dir, &self.settings.context_name);
        if fs::metadata(&context_path).await.is_ok_and(|m| m.is_file()) {
            vec![context_path]
        } else {
            Vec::new()
        }
    }

    /// Compose the prompt, run the AI command and sanitize its output.
    ///
    /// An empty sanitized result is `SummaryError::EmptySummary`.
    pub async fn generate_summary(&mut self) -> Result<String, SummaryError> {
        let instructions = load_instructions(&self.settings.instructions_path).await?;
        let transcript_path = self.transcript_path().await?;
        let transcript = load_transcript(&transcript_path).await?;
        let context =
            load_context(&context_path(&self.context.meeting_dir, &self.settings.context_name))
                .await?;
        let metadata = self.metadata();

        let prompt = compose_prompt(
            &instructions,
            &transcript,
            context.as_deref(),
            &self.context.user_name,
            &metadata,
        );
        debug!(
            "Prompt for {} ({} bytes): {}",
            metadata.customer_name,
            prompt.as_str().len(),
            prompt.preview(PROMPT_PREVIEW_CHARS)
        );

        let invocation = invoke_ai(
            &self.settings.ai_command,
            &prompt,
            &self.context.meeting_dir,
            self.settings.ai_timeout,
        )
        .await
        .inspect_err(|e| self.log_ai_failure(e))?;

        debug!(
            stdout_bytes = invocation.stdout.len(),
            stderr = %invocation.stderr.trim(),
            "AI command finished"
        );

        let summary = sanitize_output(&invocation.stdout, &self.settings.rules);
        if summary.is_empty() {
            warn!(
                command = %self.settings.ai_command,
                meeting_dir = %self.context.meeting_dir.display(),
                "AI output contained no usable summary"
            );
            return Err(SummaryError::EmptySummary);
        }
        Ok(summary)
    }

    fn log_ai_failure(&self, err: &SummaryError) {
        let stderr = match err {
            SummaryError::AiInvocationFailed { stderr, .. } => stderr.trim(),
            SummaryError::TranscriptNotFound { .. }
            | SummaryError::InstructionsNotFound { .. }
            | SummaryError::EmptySummary
            | SummaryError::RenameConflict { .. }
            | SummaryError::RenameFailed { .. }
            | SummaryError::Io { .. } => "",
        };
        error!(
            command = %self.settings.ai_command,
            error = %err,
            stderr = %stderr,
            meeting_dir = %self.context.meeting_dir.display(),
            "AI command failed"
        );
    }

    /// Write the summary into the meeting directory.
    pub async fn save_summary(&self, content: &str) -> Result<PathBuf, SummaryError> {
        let path = write_summary(&self.context.meeting_dir, &self.metadata(), content).await?;
        info!("Saved summary to {}", path.display());
        Ok(path)
    }

    /// Rename the transcript to its dated form and remember the new path.
    pub async fn archive_transcript(&mut self) -> Result<ArchiveOutcome, SummaryError> {
        let transcript_path = self.transcript_path().await?;
        let outcome = archive_transcript(&transcript_path, self.metadata().meeting_date).await?;
        if let ArchiveOutcome::Renamed(new_path) = &outcome {
            self.context.transcript_path = Some(new_path.clone());
        }
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "processor_tests.rs"]
mod tests;
