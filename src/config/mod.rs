//! Optional JSON settings file.
//!
//! Every field has a default, so a missing file and an empty object both
//! yield [`Settings::default`]. Command-line flags override whatever is
//! loaded here.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_REPLY_DELAY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulated typing delay before the assistant replies.
    pub reply_delay_ms: u64,
    /// Catalog JSON to use instead of the built-in seed.
    pub catalog_path: Option<PathBuf>,
    /// Rule table JSON to use instead of the built-in rules.
    pub rules_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY.as_millis() as u64,
            catalog_path: None,
            rules_path: None,
        }
    }
}

impl Settings {
    /// Read settings from `path`, falling back to defaults when the file
    /// does not exist. A file that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("invalid settings {}", path.display()))?;
        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}
