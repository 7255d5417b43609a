use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use leftovers::ScanConfig;

use crate::paths;

/// Settings read from `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where installed applications live
    pub applications_dir: Option<String>,
    /// Home directory to scan instead of the current user's
    pub home_dir: Option<String>,
    /// Drop repeated paths within a category
    pub dedupe: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            applications_dir: None,
            home_dir: None,
            dedupe: true,
        }
    }
}

impl Config {
    /// Load config.toml from the config directory, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Scanner settings for this config
    pub fn scan_config(&self, verbose: bool) -> Result<ScanConfig> {
        let home: PathBuf = paths::home_dir(self)?;
        Ok(ScanConfig::new(home)
            .with_verbose(verbose)
            .with_dedupe(self.dedupe))
    }
}
