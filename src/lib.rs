// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod app;
pub mod commands;
pub mod deps;
pub mod logging;
pub mod summary;
pub mod user_config;
pub mod utils;
pub mod version;

// Re-export commonly used types
pub use summary::{
    sanitize_output, ArchiveOutcome, ExtractedMetadata, MeetingContext, MeetingDate, Processor,
    SanitizeRules, SummaryError, SummarySettings, TitleMarker,
};
pub use user_config::{load_config, MeetsumConfig, UserConfigError};
