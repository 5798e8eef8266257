//! Prompt composition for the summary run.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::error::SummaryError;
use super::metadata::ExtractedMetadata;

/// Header placed above the optional context file content.
pub const CONTEXT_HEADER: &str = "CONTEXT GUIDE:";

/// The full prompt handed to the AI command on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt(String);

impl ComposedPrompt {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `max_chars` characters, for log output.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        let mut preview: String = self.0.chars().take(max_chars).collect();
        if self.0.chars().nth(max_chars).is_some() {
            preview.push_str("...");
        }
        preview
    }
}

/// Build the prompt. The layout is fixed; the AI tool's instructions file
/// refers to these exact headings.
#[must_use]
pub fn compose_prompt(
    instructions: &str,
    transcript: &str,
    context: Option<&str>,
    user_name: &str,
    metadata: &ExtractedMetadata,
) -> ComposedPrompt {
    let prompt = format!(
        "{instructions}\n\n\
         Process the transcript in transcript.txt and generate a structured meeting summary \
         following the provided instructions. Use the current working directory path to derive \
         the customer name. Write the summary from {user_name}'s first-person perspective.\n\n\
         The meeting date should be: {date}\n\
         The customer name should be: {customer} (uppercase: {customer_upper})\n\n\
         TRANSCRIPT:\n\
         {transcript}\n\n\
         {context_block}",
        date = metadata.date_label(),
        customer = metadata.customer_name,
        customer_upper = metadata.customer_name_upper,
        context_block = context_block(context),
    );

    ComposedPrompt(prompt)
}

fn context_block(context: Option<&str>) -> String {
    context.map_or_else(String::new, |content| format!("{CONTEXT_HEADER}\n{content}"))
}

/// Read the instructions file; a missing file is `InstructionsNotFound`.
pub async fn load_instructions(path: &Path) -> Result<String, SummaryError> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(SummaryError::InstructionsNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(SummaryError::io(path, e)),
    }
}

/// Read the located transcript.
pub async fn load_transcript(path: &Path) -> Result<String, SummaryError> {
    fs::read_to_string(path)
        .await
        .map_err(|e| SummaryError::io(path, e))
}

/// Where the optional context file for a meeting lives.
#[must_use]
pub fn context_path(meeting_dir: &Path, file_name: &str) -> PathBuf {
    meeting_dir.join(file_name)
}

/// Read the optional context file; `None` when it does not exist.
pub async fn load_context(path: &Path) -> Result<Option<String>, SummaryError> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SummaryError::io(path, e)),
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
