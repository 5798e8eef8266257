use color_eyre::eyre::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::user_config::MeetsumConfig;
use crate::utils::format_display_path;

/// One configuration setting as shown by `meetsum config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    pub category: &'static str,
    pub setting: &'static str,
    pub value: String,
    pub default: String,
    pub description: &'static str,
}

fn entry(
    category: &'static str,
    setting: &'static str,
    value: String,
    default: String,
    description: &'static str,
) -> ConfigEntry {
    ConfigEntry {
        category,
        setting,
        value,
        default,
        description,
    }
}

/// Every setting with its effective value and default.
#[must_use]
pub fn config_entries(config: &MeetsumConfig) -> Vec<ConfigEntry> {
    let defaults = MeetsumConfig::default();
    vec![
        entry("paths", "file_browser_root_dir", config.paths.file_browser_root_dir.clone(),
            defaults.paths.file_browser_root_dir, "Base directory for customer meeting folders"),
        entry("paths", "automation_dir", config.paths.automation_dir.clone(),
            defaults.paths.automation_dir, "Directory containing the AI instructions"),
        entry("paths", "instructions_file", config.paths.instructions_file.clone(),
            defaults.paths.instructions_file, "Name of the AI instructions file"),
        entry("files", "transcript", config.files.transcript.clone(),
            defaults.files.transcript, "Transcript filename in meeting directories"),
        entry("files", "pov_input", config.files.pov_input.clone(),
            defaults.files.pov_input, "Optional context file in meeting directories"),
        entry("ai", "command", config.ai.command.clone(),
            defaults.ai.command, "AI command-line tool, prompt sent on stdin"),
        entry("ai", "timeout", config.ai.timeout.clone(),
            defaults.ai.timeout, "Time limit for the AI command (0s disables)"),
        entry("features", "trace_mode", config.features.trace_mode.to_string(),
            defaults.features.trace_mode.to_string(), "Debug logging and no spinner"),
        entry("logging", "level", config.logging.level.clone(),
            defaults.logging.level, "debug, info, warn or error"),
        entry("logging", "output", config.logging.output.to_string(),
            defaults.logging.output.to_string(), "screen, file or both"),
        entry("logging", "dir", config.logging.dir.clone(),
            defaults.logging.dir, "Directory for meetsum.log"),
        entry("logging", "json", config.logging.json.to_string(),
            defaults.logging.json.to_string(), "JSON log lines"),
        entry("logging", "rotation", config.logging.rotation.clone(),
            defaults.logging.rotation, "daily, hourly or never"),
        entry("user", "name", config.user.name.clone(),
            defaults.user.name, "Summaries are written from this person's perspective"),
        entry("sanitizer", "extra_noise_markers", config.sanitizer.extra_noise_markers.join(", "),
            String::new(), "Extra AI output lines to discard"),
        entry("sanitizer", "extra_title_markers", config.sanitizer.extra_title_markers.join(", "),
            String::new(), "Extra markers for the first summary line"),
    ]
}

/// Print the effective configuration as a table or as JSON.
pub fn run_config<W: Write>(
    config: &MeetsumConfig,
    source: Option<&Path>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let entries = config_entries(config);
    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    let origin = source.map_or_else(|| "defaults (no settings.toml found)".to_string(), format_display_path);
    writeln!(out, "Configuration: {origin}")?;
    let setting_width = entries
        .iter()
        .map(|e| e.category.len().saturating_add(e.setting.len()).saturating_add(1))
        .max()
        .unwrap_or_default();
    let value_width = entries.iter().map(|e| e.value.len()).max().unwrap_or_default();
    for e in &entries {
        let key = format!("{}.{}", e.category, e.setting);
        let marker = if e.value == e.default { " " } else { "*" };
        writeln!(
            out,
            "{marker} {key:<setting_width$}  {:<value_width$}  {}",
            e.value, e.description
        )?;
    }
    writeln!(out, "(* differs from default)")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_every_section() {
        let entries = config_entries(&MeetsumConfig::default());
        for category in ["paths", "files", "ai", "features", "logging", "user", "sanitizer"] {
            assert!(entries.iter().any(|e| e.category == category), "{category}");
        }
        assert!(entries.iter().all(|e| e.value == e.default));
    }

    #[test]
    fn test_table_marks_changed_values() {
        let mut config = MeetsumConfig::default();
        config.ai.command = "claude".to_string();
        let mut out = Vec::new();

        run_config(&config, Some(Path::new("/etc/meetsum/settings.toml")), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Configuration: /etc/meetsum/settings.toml\n"));
        let line = text.lines().find(|l| l.contains("ai.command")).unwrap();
        assert!(line.starts_with('*'));
        assert!(line.contains("claude"));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        run_config(&MeetsumConfig::default(), None, true, &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let entries = parsed.as_array().unwrap();
        assert!(entries
            .iter()
            .any(|e| e["setting"] == "command" && e["value"] == "gemini"));
    }
}
