//! Settings and configuration utilities.
//!
//! Reads `$HOME/.changelogparser/settings.json` and uses it as a fallback for
//! environment variables:
//!
//! ```json
//! { "env": { "CHANGELOGPARSER_FILE": "docs/CHANGELOG" } }
//! ```

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Environment key for the changelog to read.
pub const FILE_ENV: &str = "CHANGELOGPARSER_FILE";

/// Environment key for the release notes to write.
pub const OUTFILE_ENV: &str = "CHANGELOGPARSER_OUTFILE";

/// Default changelog path.
pub const DEFAULT_FILE: &str = "CHANGELOG";

/// Default release notes path.
pub const DEFAULT_OUTFILE: &str = "CHANGELOG-RELEASENOTES.md";

/// Settings loaded from `$HOME/.changelogparser/settings.json`.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path. A missing file yields defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Self>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".changelogparser").join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok().or_else(|| self.env.get(key).cloned())
    }

    /// Picks `explicit` if given, then `key` from the environment or settings,
    /// then `default`.
    pub fn resolve(&self, explicit: Option<String>, key: &str, default: &str) -> String {
        if let Some(value) = explicit {
            return value;
        }
        match self.get_env_var(key) {
            Some(value) => {
                debug!(key, value = %value, "Resolved from environment");
                value
            }
            None => default.to_string(),
        }
    }
}

/// Loads settings from the default location, falling back to empty settings
/// when they cannot be read.
pub fn load_or_default() -> Settings {
    Settings::load().unwrap_or_else(|e| {
        debug!("Ignoring unreadable settings: {e:#}");
        Settings::default()
    })
}
