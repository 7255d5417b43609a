//! Centralized path resolution for zaap
//!
//! # Environment Variables
//!
//! - `ZAAP_CONFIG_DIR` - Override config directory
//! - `ZAAP_HOME` - Scan a different home directory (e.g. another user's)
//! - `ZAAP_APPLICATIONS_DIR` - Override the applications directory
//!
//! # Path Resolution Priority
//!
//! For config_dir():
//! 1. `ZAAP_CONFIG_DIR` environment variable
//! 2. `XDG_CONFIG_HOME/zaap` (if set)
//! 3. `~/.config/zaap`
//!
//! For the applications directory:
//! 1. `--apps-dir` flag (or `ZAAP_APPLICATIONS_DIR`)
//! 2. `applications_dir` in config.toml
//! 3. `/Applications`

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;

/// Environment variable for config directory override
pub const ENV_CONFIG_DIR: &str = "ZAAP_CONFIG_DIR";

/// Environment variable for home directory override
pub const ENV_HOME: &str = "ZAAP_HOME";

/// Environment variable for applications directory override
pub const ENV_APPLICATIONS_DIR: &str = "ZAAP_APPLICATIONS_DIR";

/// Default macOS installation directory
pub const DEFAULT_APPLICATIONS_DIR: &str = "/Applications";

/// Get the zaap config directory path
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = expand(&dir);
        log::debug!(
            "Using config dir from {}: {}",
            ENV_CONFIG_DIR,
            path.display()
        );
        return Ok(path);
    }

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg_config).join("zaap");
        log::debug!("Using XDG_CONFIG_HOME: {}", path.display());
        return Ok(path);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    let path = home.join(".config").join("zaap");
    log::debug!("Using default config dir: {}", path.display());
    Ok(path)
}

/// Path of the config file
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Home directory whose `Library` gets scanned
///
/// Priority: `ZAAP_HOME`, then `home_dir` from config, then the real home.
pub fn home_dir(config: &Config) -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_HOME) {
        let path = expand(&dir);
        log::debug!("Using home dir from {}: {}", ENV_HOME, path.display());
        return Ok(path);
    }

    if let Some(dir) = &config.home_dir {
        return Ok(expand(dir));
    }

    dirs::home_dir().context("Could not determine home directory")
}

/// Directory holding installed application bundles
pub fn applications_dir(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.or_else(|| config.applications_dir.as_deref().map(expand))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_APPLICATIONS_DIR))
}

/// Expand `~` and environment variables in a path
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}

// ============================================================================
// Tests
// ============================================================================
