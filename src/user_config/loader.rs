use std::path::{Path, PathBuf};
use tracing::debug;
use super::{MeetsumConfig, UserConfigError, CONFIG_FILENAME};

/// Candidate config locations, in lookup order: the working directory, the
/// user config directory, then `/etc/meetsum`.
#[must_use]
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILENAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("meetsum").join(CONFIG_FILENAME));
    }
    paths.push(PathBuf::from("/etc/meetsum").join(CONFIG_FILENAME));
    paths
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, the first existing file from
/// [`config_search_paths`] is used, and defaults apply when none exists.
/// Returns the config together with the file it came from.
///
/// # Errors
///
/// Returns [`UserConfigError`] if the chosen file cannot be read or parsed.
pub fn load_config(
    explicit: Option<&Path>,
) -> Result<(MeetsumConfig, Option<PathBuf>), UserConfigError> {
    if let Some(path) = explicit {
        return load_config_from(path).map(|config| (config, Some(path.to_path_buf())));
    }
    match config_search_paths().into_iter().find(|p| p.is_file()) {
        Some(path) => load_config_from(&path).map(|config| (config, Some(path))),
        None => {
            debug!("No {CONFIG_FILENAME} found; using defaults");
            Ok((MeetsumConfig::default(), None))
        }
    }
}

/// Read and parse one config file.
///
/// # Errors
///
/// Returns [`UserConfigError`] if the file cannot be read or parsed.
pub fn load_config_from(path: &Path) -> Result<MeetsumConfig, UserConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| UserConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = MeetsumConfig::from_toml_str(&content, path)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
