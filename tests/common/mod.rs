//! Common test utilities

use meetsum::MeetsumConfig;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create `<root>/<relative>` with a `transcript.txt` containing `transcript`.
pub fn create_meeting_dir(root: &Path, relative: &str, transcript: &str) -> PathBuf {
    let meeting_dir = root.join(relative);
    std::fs::create_dir_all(&meeting_dir).expect("Failed to create meeting dir");
    std::fs::write(meeting_dir.join("transcript.txt"), transcript)
        .expect("Failed to write transcript");
    meeting_dir
}

/// Write an executable shell script standing in for the AI command.
#[cfg(unix)]
pub fn fake_ai_command(root: &Path, body: &str) -> String {
    use std::os::unix::fs::PermissionsExt as _;

    let path = root.join("fake-ai.sh");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod script");
    path.to_string_lossy().into_owned()
}

/// Config whose instructions file lives under `root/automation` and whose AI
/// command is `ai_command`.
pub fn test_config(root: &Path, ai_command: &str, instructions: &str) -> MeetsumConfig {
    let automation = root.join("automation");
    std::fs::create_dir_all(&automation).expect("Failed to create automation dir");

    let mut config = MeetsumConfig::default();
    config.paths.automation_dir = automation.to_string_lossy().into_owned();
    std::fs::write(automation.join(&config.paths.instructions_file), instructions)
        .expect("Failed to write instructions");
    config.ai.command = ai_command.to_string();
    config.ai.timeout = "30s".to_string();
    config.user.name = "Dustin".to_string();
    config.features.trace_mode = true;
    config
}
