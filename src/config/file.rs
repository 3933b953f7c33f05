//! Configuration file loading

use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ConfigError, Result};

impl Config {
    /// Get the default config file path: `~/.config/ethlogfilter/config.yaml`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
        Ok(home
            .join(".config")
            .join("ethlogfilter")
            .join("config.yaml"))
    }

    /// Load from a specific path
    ///
    /// Unknown keys are ignored, missing keys keep their zero value and an
    /// empty document decodes to the default config. CLI-only fields
    /// (`config_file`, `verbose`, `output_file`) are dropped during decoding.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty or comment-only document parses as YAML null.
        let config: Option<Self> =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(config.unwrap_or_default())
    }
}
