//! Extraction of the markdown summary from raw AI command output.
//!
//! The AI tool's stdout has no fixed shape. Observed variants:
//! - the summary wrapped in a fenced block labelled `markdown`,
//! - the summary printed directly, starting at a recognizable title line,
//! - either of the above preceded by tool diagnostics ("Loaded cached
//!   credentials", failed `write_file` tool calls, "Here is the content...").
//!
//! A structured pass handles the first two. When it finds nothing, a salvage
//! pass drops everything up to the last diagnostic line and strips fences.

/// Opening fence of a markdown-labelled code block.
pub const FENCE_OPEN: &str = "```markdown";

/// Any code fence.
pub const FENCE: &str = "```";

/// Diagnostic phrases the gemini CLI is known to print on stdout.
pub const DEFAULT_NOISE_MARKERS: &[&str] = &[
    "Loaded cached credentials",
    "Error executing tool",
    "Tool \"write_file\" not found",
    "I was unable to create the file directly",
    "Here is the content",
    "You can save it as",
];

/// How a line is recognized as the start of an unfenced summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleMarker {
    /// The line contains this text anywhere.
    Contains(String),
    /// The line starts with this text.
    Prefix(String),
}

impl TitleMarker {
    fn matches(&self, line: &str) -> bool {
        match self {
            Self::Contains(text) => line.contains(text.as_str()),
            Self::Prefix(text) => line.starts_with(text.as_str()),
        }
    }
}

/// The marker tables used by [`sanitize_output`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeRules {
    noise_markers: Vec<String>,
    title_markers: Vec<TitleMarker>,
}

impl Default for SanitizeRules {
    fn default() -> Self {
        Self {
            noise_markers: DEFAULT_NOISE_MARKERS
                .iter()
                .map(|m| (*m).to_string())
                .collect(),
            title_markers: vec![
                TitleMarker::Contains("_SUMMARY_".to_string()),
                TitleMarker::Prefix("*_".to_string()),
            ],
        }
    }
}

impl SanitizeRules {
    /// Rules with no markers at all; only fenced blocks are recognized.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            noise_markers: Vec::new(),
            title_markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_noise_marker(mut self, marker: &str) -> Self {
        if !marker.is_empty() {
            self.noise_markers.push(marker.to_string());
        }
        self
    }

    #[must_use]
    pub fn with_title_marker(mut self, marker: TitleMarker) -> Self {
        self.title_markers.push(marker);
        self
    }

    #[must_use]
    pub fn noise_markers(&self) -> &[String] {
        &self.noise_markers
    }

    fn is_noise(&self, line: &str) -> bool {
        self.noise_markers.iter().any(|m| line.contains(m.as_str()))
    }

    fn is_title(&self, line: &str) -> bool {
        self.title_markers.iter().any(|m| m.matches(line))
    }
}

/// Where the structured pass is within the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing found yet.
    Searching,
    /// Inside a ```` ```markdown ```` block.
    Fenced,
    /// After an unfenced title line; everything that follows is kept.
    Unfenced,
}

/// Extract the summary markdown from raw AI stdout.
///
/// Returns an empty string when nothing usable is found; callers treat that
/// as a failed run.
#[must_use]
pub fn sanitize_output(raw: &str, rules: &SanitizeRules) -> String {
    let lines = structured_pass(raw, rules);
    if lines.is_empty() {
        salvage_pass(raw, rules)
    } else {
        lines.join("\n").trim().to_string()
    }
}

fn structured_pass<'raw>(raw: &'raw str, rules: &SanitizeRules) -> Vec<&'raw str> {
    let mut phase = Phase::Searching;
    let mut kept = Vec::new();

    for line in raw.lines() {
        if rules.is_noise(line) {
            continue;
        }
        if phase != Phase::Fenced && line.starts_with(FENCE_OPEN) {
            phase = Phase::Fenced;
            continue;
        }
        match phase {
            Phase::Fenced if line.starts_with(FENCE) => break,
            Phase::Fenced | Phase::Unfenced => kept.push(line),
            Phase::Searching => {
                if rules.is_title(line) {
                    kept.push(line);
                    phase = Phase::Unfenced;
                }
            }
        }
    }

    kept
}

/// Keep only what follows the last line carrying each noise marker, then
/// drop fence tokens. Noise-only output salvages to an empty string.
fn salvage_pass(raw: &str, rules: &SanitizeRules) -> String {
    let mut remaining = raw;
    for marker in rules.noise_markers() {
        while let Some((_, after_marker)) = remaining.split_once(marker.as_str()) {
            remaining = after_marker.split_once('\n').map_or("", |(_, rest)| rest);
        }
    }

    remaining
        .replace(FENCE_OPEN, "")
        .replace(FENCE, "")
        .trim()
        .to_string()
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod tests;
