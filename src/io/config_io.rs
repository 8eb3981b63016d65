use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

pub const CONFIG_FILE: &str = "rollover.toml";

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse rollover.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize rollover.toml: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Load `rollover.toml` from the notes directory. A missing file yields
/// the default configuration; a present file only needs the fields it
/// wants to override.
pub fn read_config(notes_dir: &Path) -> Result<Config, ConfigError> {
    let path = notes_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Write a config to `rollover.toml` in the notes directory
pub fn write_config(notes_dir: &Path, config: &Config) -> Result<(), ConfigError> {
    let path = notes_dir.join(CONFIG_FILE);
    let text = toml::to_string_pretty(config)?;
    fs::write(&path, text).map_err(|e| ConfigError::Write { path, source: e })?;
    Ok(())
}
