//! User settings for kasku
//!
//! The income keyword list and the category breakdown limit are data, not
//! code, so the classification heuristics can be tuned without rebuilding.

use serde::{Deserialize, Serialize};

use super::paths::KaskuPaths;
use crate::error::KaskuError;

/// User settings for kasku
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Keywords whose presence (as a substring of the lowercased message)
    /// marks a transaction as income; everything else is an expense.
    ///
    /// Substring matching can false-positive ("feeling" contains "fee").
    /// That is the accepted heuristic, inherited from the source system.
    #[serde(default = "default_income_keywords")]
    pub income_keywords: Vec<String>,

    /// Maximum distinct categories in a breakdown before the tail collapses
    /// into a single bucket
    #[serde(default = "default_category_limit")]
    pub category_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_income_keywords() -> Vec<String> {
    ["gaji", "bonus", "thr", "fee", "komisi", "refund", "transfer masuk"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_category_limit() -> usize {
    6
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            income_keywords: default_income_keywords(),
            category_limit: default_category_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &KaskuPaths) -> Result<Self, KaskuError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| KaskuError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| KaskuError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KaskuPaths) -> Result<(), KaskuError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| KaskuError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| KaskuError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
