use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use clipstash_engine::ResetMode;

/// Name of the optional configuration document in the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Invocation defaults loaded from the data directory.
///
/// An absent document yields the defaults; a malformed one is an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default reset mode when `--reset` is not given.
    #[serde(default)]
    pub reset: Option<ConfigResetMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigResetMode {
    Auto,
    On,
    Off,
}

impl From<ConfigResetMode> for ResetMode {
    fn from(mode: ConfigResetMode) -> Self {
        match mode {
            ConfigResetMode::Auto => ResetMode::Auto,
            ConfigResetMode::On => ResetMode::On,
            ConfigResetMode::Off => ResetMode::Off,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The default reset mode for this invocation.
    pub fn reset_mode(&self) -> ResetMode {
        self.reset.map(ResetMode::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn absent_document_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.reset_mode(), ResetMode::Auto);
    }

    #[test]
    fn reset_mode_is_read_from_the_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "reset = \"off\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.reset_mode(), ResetMode::Off);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "reset = \"sometimes\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
