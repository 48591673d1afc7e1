use crate::error::{Result, ShelfError};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "shelf.json";
const DEFAULT_CATALOG_FILE: &str = "catalog.json";
const DEFAULT_LOG_FILE: &str = "library.log";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for shelf, stored in ./shelf.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Where the catalog lives, relative to the working directory
    #[serde(default = "default_catalog_file")]
    pub catalog_file: PathBuf,

    /// Where the journal is appended
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Lowest severity written to the journal (off, error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_catalog_file() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_FILE)
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            catalog_file: default_catalog_file(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig = serde_json::from_str(&content).map_err(|e| {
            ShelfError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        config.level_filter()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ShelfError::Config(format!("Unknown log level: {}", self.log_level)))
    }
}
