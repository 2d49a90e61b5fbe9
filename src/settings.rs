use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CashflowError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_scan_dir")]
    pub scan_dir: String,
    #[serde(default = "default_db_path")]
    pub db_path: String,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_scan_dir() -> String {
    ".".to_string()
}

fn default_db_path() -> String {
    "cashflow.db".to_string()
}

fn default_preview_rows() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_dir: default_scan_dir(),
            db_path: default_db_path(),
            preview_rows: default_preview_rows(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("cashflow")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Read settings from `path`. A missing or unreadable file gives the defaults;
/// a file that is present but not valid settings JSON is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Ok(Settings::default());
    };
    serde_json::from_str(&content)
        .map_err(|e| CashflowError::Settings(format!("{}: {e}", path.display())))
}

pub fn load_settings() -> Result<Settings> {
    load_settings_from(&settings_path())
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}
