// ── Adapter configuration ─────────────────────────────────────────────────────
//
// Build-mode defaults, optionally overridden from a JSON file:
//
//   { "save_mode": "installed", "app_dir_name": "colobot", "default_save_dir": "saves" }
//
// Every field is optional.

use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Where persisted user data lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveMode {
    /// Always use `default_save_dir` (portable installs, development builds).
    Portable,
    /// Prefer the per-user profile directory.
    Installed,
}

impl SaveMode {
    /// Mode selected by the `portable-saves` / `dev-build` cargo features.
    pub const fn from_build() -> Self {
        if cfg!(any(feature = "portable-saves", feature = "dev-build")) {
            Self::Portable
        } else {
            Self::Installed
        }
    }
}

impl Default for SaveMode {
    fn default() -> Self {
        Self::from_build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub save_mode: SaveMode,
    /// Directory name appended to the user profile directory.
    pub app_dir_name: String,
    /// Platform-neutral save directory, used in portable mode and as the
    /// fallback when no profile directory can be found.
    pub default_save_dir: PathBuf,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            save_mode: SaveMode::default(),
            app_dir_name: "colobot".to_owned(),
            default_save_dir: PathBuf::from("saves"),
        }
    }
}

impl PlatformConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        let config = serde_json::from_slice(&data)?;
        log::debug!("loaded platform config from {}", path.display());
        Ok(config)
    }
}
