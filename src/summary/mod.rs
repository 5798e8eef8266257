//! The transcript-to-summary pipeline.
//!
//! Leaves first: [`metadata`] reads the customer and date from the meeting
//! path, [`transcript`] finds and archives the transcript, [`prompt`] builds
//! the AI input, [`invoke`] runs the AI command, [`sanitize`] isolates the
//! markdown, [`output`] writes it, and [`processor`] sequences them.

pub mod error;
pub mod invoke;
pub mod metadata;
pub mod output;
pub mod processor;
pub mod prompt;
pub mod sanitize;
pub mod transcript;

pub use error::SummaryError;
pub use metadata::{ExtractedMetadata, MeetingDate};
pub use processor::{MeetingContext, Processor, SummarySettings};
pub use sanitize::{sanitize_output, SanitizeRules, TitleMarker};
pub use transcript::ArchiveOutcome;
