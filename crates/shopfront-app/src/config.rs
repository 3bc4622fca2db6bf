//! Settings parser for .shopfront/config.toml
//!
//! Only the timing knobs live here. A missing file means defaults; a file
//! that exists but fails to parse is a hard error, silently ignoring a
//! user's config is worse than refusing to start.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use shopfront_core::prelude::*;
use shopfront_core::Error;

const CONFIG_FILENAME: &str = "config.toml";
const SHOPFRONT_DIR: &str = ".shopfront";

/// Timer durations, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    /// One-shot delay before the initial loading placeholder clears.
    pub initial_load_ms: u64,

    /// Debounce window after a committed query change.
    pub filter_settle_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            initial_load_ms: 1000,
            filter_settle_ms: 800,
        }
    }
}

/// Top-level settings from `.shopfront/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub timing: TimingSettings,
}

impl Settings {
    /// Load settings for a project directory.
    ///
    /// A missing config file yields defaults. A present-but-malformed file
    /// is an error.
    pub fn load(project_path: &Path) -> Result<Self> {
        let path = config_path(project_path);
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let settings: Settings = toml::from_str(&content).map_err(|e| Error::ConfigInvalid {
            path: path.clone(),
            message: e.to_string(),
        })?;

        info!(
            initial_load_ms = settings.timing.initial_load_ms,
            filter_settle_ms = settings.timing.filter_settle_ms,
            "Loaded settings from {}",
            path.display()
        );
        Ok(settings)
    }
}

fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(SHOPFRONT_DIR).join(CONFIG_FILENAME)
}
