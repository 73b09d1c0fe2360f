use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::pinned::PINNED_DIR;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CLIPSTASH_PATH";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CLIPSTASH_PATH environment variable (with tilde expansion)
/// 3. Platform data directory
/// 4. ~/.clipstash (fallback for systems without one)
pub fn resolve_data_dir(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("clipstash"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".clipstash"));
    }

    Err(Error::DataDir(
        "no HOME directory or platform data directory found".to_string(),
    ))
}

/// Directory holding pinned-item metadata for a data directory.
pub fn pinned_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(PINNED_DIR)
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
