// src/config/options.rs
//
// Run options. Defaults live here and in `consts`; a TOML file can override
// any subset of keys. A missing file is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::ConfigError;
use crate::model::SeasonTag;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// When cell text gets typed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleaningPolicy {
    /// Clean while assembling: records carry typed values.
    #[default]
    Eager,
    /// Keep raw text; a later stage cleans.
    Deferred,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub cleaning: CleaningPolicy,
    /// Stop a league after this many pages (None = until the site runs out).
    pub max_pages: Option<u32>,
    /// Tag every record with this season, for historical snapshots.
    pub season: Option<SeasonTag>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            cleaning: CleaningPolicy::Eager,
            max_pages: None,
            season: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
    Both,
}

impl ExportFormat {
    pub fn wants_csv(&self) -> bool { matches!(self, ExportFormat::Csv | ExportFormat::Both) }
    pub fn wants_json(&self) -> bool { matches!(self, ExportFormat::Json | ExportFormat::Both) }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
    /// Swap field codes for readable column names (`oa` → `Overall Score`).
    pub rename_columns: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Both,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            rename_columns: true,
        }
    }
}

impl AppOptions {
    /// Load from `path`; a missing file gives defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
