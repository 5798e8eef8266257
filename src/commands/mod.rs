mod check;
mod config;
mod run;
mod spinner;
mod validate;

pub use check::run_check;
pub use config::{config_entries, run_config, ConfigEntry};
pub use run::{absolute_dir, prompt_required, run_summary};
pub use spinner::Spinner;
pub use validate::{
    configuration_checks, meeting_checks, run_validate, FileCheck, COMMON_MEETING_FILES,
};

use color_eyre::eyre::Result;
use std::io::Write;

use crate::version::{build_time, git_commit, VERSION};

/// Print version and build information.
pub fn run_version<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "meetsum {VERSION}")?;
    writeln!(out, "Build time: {}", build_time())?;
    writeln!(out, "Git commit: {}", git_commit())?;
    Ok(())
}
