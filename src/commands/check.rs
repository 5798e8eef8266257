use color_eyre::eyre::{bail, Result};
use std::io::Write;

use crate::deps::{find_command, GIT_COMMAND};
use crate::user_config::MeetsumConfig;
use crate::utils::format_display_path;

/// Report whether the AI command and git are installed. Fails when the AI
/// command is missing.
pub fn run_check<W: Write>(config: &MeetsumConfig, out: &mut W) -> Result<()> {
    writeln!(out, "Dependency check")?;

    let ai_command = &config.ai.command;
    let ai_found = match find_command(ai_command) {
        Some(path) => {
            writeln!(out, "  [ok]      {ai_command}: {}", format_display_path(&path))?;
            true
        }
        None => {
            writeln!(out, "  [missing] {ai_command}: not found on PATH (required)")?;
            false
        }
    };

    match find_command(GIT_COMMAND) {
        Some(path) => writeln!(out, "  [ok]      {GIT_COMMAND}: {}", format_display_path(&path))?,
        None => writeln!(out, "  [warn]    {GIT_COMMAND}: not found (optional)")?,
    }

    if !ai_found {
        bail!("Required AI command '{ai_command}' is not installed");
    }
    writeln!(out, "All required dependencies are available")?;
    Ok(())
}
