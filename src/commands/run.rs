//! The default command: generate a summary for one meeting directory.

use color_eyre::eyre::{bail, eyre, Result, WrapErr as _};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

use super::spinner::Spinner;
use crate::app::RunArgs;
use crate::deps::command_available;
use crate::logging::log_file_path;
use crate::summary::{ArchiveOutcome, Processor, SummaryError, SummarySettings};
use crate::user_config::MeetsumConfig;
use crate::utils::{clean_path, expand_home, file_name_string, format_display_path};

/// Generate, write and archive. Prompts on `input` for anything the
/// arguments and config do not provide.
pub async fn run_summary<R: BufRead, W: Write>(
    config: &MeetsumConfig,
    args: &RunArgs,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let command = &config.ai.command;
    if !command_available(command) {
        bail!("AI command '{command}' was not found on PATH. Run 'meetsum check' for details.");
    }

    let user_name = resolve_user_name(config, args, input, out)?;
    let meeting_dir = resolve_meeting_dir(args, input, out)?;
    let settings = SummarySettings::from_config(config).wrap_err("Invalid configuration")?;
    let mut processor = Processor::new(settings, &user_name, &meeting_dir);

    writeln!(out, "Meeting: {}", format_display_path(&meeting_dir))?;
    let transcript = processor.validate_required_files().await?;
    writeln!(out, "Transcript: {}", file_name_string(&transcript))?;
    writeln!(
        out,
        "Instructions: {}",
        format_display_path(&processor.settings().instructions_path)
    )?;
    let optional = processor.optional_files().await;
    if optional.is_empty() {
        writeln!(out, "Context: none ({} not found)", config.files.pov_input)?;
    } else {
        for path in &optional {
            writeln!(out, "Context: {}", file_name_string(path))?;
        }
    }
    out.flush()?;

    let summary = generate(&mut processor, config.features.trace_mode).await?;
    let written = processor.save_summary(&summary).await?;
    writeln!(out, "Summary written: {}", file_name_string(&written))?;
    writeln!(out, "Location: {}", format_display_path(&meeting_dir))?;

    report_archive(&mut processor, out).await
}

async fn generate(processor: &mut Processor, trace_mode: bool) -> Result<String> {
    let spinner = (!trace_mode).then(|| Spinner::start("Generating summary..."));
    let result = processor.generate_summary().await;
    if let Some(spinner) = spinner {
        spinner.stop().await;
    }
    result.map_err(|e| match e {
        SummaryError::EmptySummary => eyre!(e).wrap_err(
            "The AI command finished but printed no usable summary; nothing was written",
        ),
        SummaryError::AiInvocationFailed { .. } => {
            let hint = log_file_path().map_or_else(
                || "Re-run with --trace for details".to_string(),
                |path| format!("Check the log file: {}", path.display()),
            );
            eyre!(e).wrap_err(hint)
        }
        SummaryError::TranscriptNotFound { .. }
        | SummaryError::InstructionsNotFound { .. }
        | SummaryError::RenameConflict { .. }
        | SummaryError::RenameFailed { .. }
        | SummaryError::Io { .. } => eyre!(e),
    })
}

/// Archive failures are warnings: the summary is already on disk.
async fn report_archive<W: Write>(processor: &mut Processor, out: &mut W) -> Result<()> {
    match processor.archive_transcript().await {
        Ok(ArchiveOutcome::Renamed(path)) => {
            writeln!(out, "Transcript renamed to {}", file_name_string(&path))?;
        }
        Ok(ArchiveOutcome::AlreadyDated) => {
            writeln!(out, "Transcript already carries a date; not renamed")?;
        }
        Ok(ArchiveOutcome::Undated) => {
            writeln!(out, "No meeting date in the path; transcript not renamed")?;
        }
        Err(e) => {
            warn!("Transcript not archived: {e}");
            writeln!(out, "Warning: {e}")?;
        }
    }
    Ok(())
}

fn resolve_user_name<R: BufRead, W: Write>(
    config: &MeetsumConfig,
    args: &RunArgs,
    input: &mut R,
    out: &mut W,
) -> Result<String> {
    let configured = args
        .name
        .as_deref()
        .or(Some(config.user.name.as_str()))
        .map(str::trim)
        .filter(|name| !name.is_empty());
    match configured {
        Some(name) => Ok(name.to_string()),
        None => prompt_required(input, out, "Your name"),
    }
}

fn resolve_meeting_dir<R: BufRead, W: Write>(
    args: &RunArgs,
    input: &mut R,
    out: &mut W,
) -> Result<PathBuf> {
    let raw = match args.meeting_dir.as_deref().map(str::trim) {
        Some(dir) if !dir.is_empty() => dir.to_string(),
        Some(_) | None => prompt_required(input, out, "Meeting directory")?,
    };
    absolute_dir(&expand_home(&raw))
}

/// Clean absolute form of an existing directory. `..` segments are
/// resolved so the customer and date come from the real location.
pub fn absolute_dir(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        bail!("Directory does not exist: {}", path.display());
    }
    let absolute = std::path::absolute(path)
        .wrap_err_with(|| format!("Cannot resolve {}", path.display()))?;
    Ok(clean_path(&absolute))
}

/// Ask for a line of input; an empty answer or end of input is an error.
pub fn prompt_required<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<String> {
    write!(out, "{label}: ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();
    if answer.is_empty() {
        bail!("{label} is required");
    }
    Ok(answer.to_string())
}
