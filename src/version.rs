//! Build information embedded at compile time by `build.rs`.

const UNKNOWN: &str = "unknown";

/// Crate version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// UTC build timestamp, or `unknown` when built without `build.rs` output.
#[must_use]
pub fn build_time() -> &'static str {
    option_env!("MEETSUM_BUILD_TIME").unwrap_or(UNKNOWN)
}

/// Short git commit hash of the build, or `unknown` outside a git checkout.
#[must_use]
pub fn git_commit() -> &'static str {
    option_env!("MEETSUM_GIT_COMMIT").unwrap_or(UNKNOWN)
}
