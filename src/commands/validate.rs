//! `meetsum validate`: report which required and optional files exist.

use color_eyre::eyre::{bail, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::run::absolute_dir;
use crate::summary::prompt::context_path;
use crate::summary::transcript::{locate_transcript, DATED_TRANSCRIPT_PATTERN};
use crate::user_config::MeetsumConfig;
use crate::utils::{expand_home, format_display_path};

/// Extra files commonly kept next to a transcript.
pub const COMMON_MEETING_FILES: &[&str] = &[
    "notes.md",
    "agenda.md",
    "recording.mp4",
    "recording.m4a",
    "attendees.txt",
];

/// One row of the validation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCheck {
    pub name: String,
    pub path: Option<PathBuf>,
    pub required: bool,
    pub description: &'static str,
}

impl FileCheck {
    #[must_use]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Validate a meeting directory, or the configured paths when `dir` is `None`.
pub async fn run_validate<W: Write>(
    config: &MeetsumConfig,
    dir: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let checks = match dir {
        Some(dir) => {
            let meeting_dir = absolute_dir(&expand_home(dir))?;
            writeln!(out, "Meeting directory: {}", format_display_path(&meeting_dir))?;
            meeting_checks(config, &meeting_dir).await
        }
        None => {
            writeln!(out, "Configuration paths")?;
            configuration_checks(config)
        }
    };
    render_checks(out, &checks)?;

    let missing = checks.iter().filter(|c| c.required && !c.found()).count();
    if missing > 0 {
        bail!("{missing} required item(s) missing");
    }
    Ok(())
}

/// Required transcript, optional context file, and any common extras present.
pub async fn meeting_checks(config: &MeetsumConfig, meeting_dir: &Path) -> Vec<FileCheck> {
    let transcript_name = format!("{} or {DATED_TRANSCRIPT_PATTERN}", config.files.transcript);
    let mut checks = vec![
        FileCheck {
            name: transcript_name,
            path: locate_transcript(meeting_dir, &config.files.transcript).await.ok(),
            required: true,
            description: "Meeting transcript, required for processing",
        },
        FileCheck {
            name: config.files.pov_input.clone(),
            path: existing(context_path(meeting_dir, &config.files.pov_input)),
            required: false,
            description: "Point of view context, optional",
        },
    ];
    checks.extend(COMMON_MEETING_FILES.iter().filter_map(|name| {
        existing(meeting_dir.join(name)).map(|path| FileCheck {
            name: (*name).to_string(),
            path: Some(path),
            required: false,
            description: "Additional meeting file",
        })
    }));
    checks
}

/// Instructions file, file browser root and automation directory.
#[must_use]
pub fn configuration_checks(config: &MeetsumConfig) -> Vec<FileCheck> {
    vec![
        FileCheck {
            name: "Instructions file".to_string(),
            path: existing(config.instructions_path()),
            required: true,
            description: "AI instructions for summary generation",
        },
        FileCheck {
            name: "Customers directory".to_string(),
            path: existing(config.file_browser_root_dir()),
            required: true,
            description: "Base directory for customer meeting folders",
        },
        FileCheck {
            name: "Automation directory".to_string(),
            path: existing(config.automation_dir()),
            required: true,
            description: "Directory containing the instructions file",
        },
    ]
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

fn render_checks<W: Write>(out: &mut W, checks: &[FileCheck]) -> std::io::Result<()> {
    let width = checks.iter().map(|c| c.name.len()).max().unwrap_or_default();
    for check in checks {
        let status = match (check.found(), check.required) {
            (true, _) => "[ok]     ",
            (false, true) => "[missing]",
            (false, false) => "[absent] ",
        };
        let location = check
            .path
            .as_deref()
            .map_or_else(|| "-".to_string(), format_display_path);
        writeln!(
            out,
            "  {status} {:<width$}  {location}  ({})",
            check.name, check.description
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
