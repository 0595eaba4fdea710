//! User settings
//!
//! Manages display and reporting preferences persisted in `config.json`.

use serde::{Deserialize, Serialize};

use super::paths::TuitionPaths;
use crate::error::TuitionError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Months covered by a history report when no start month is given
    #[serde(default = "default_history_window")]
    pub history_window_months: u32,

    /// Show months as "September 2025" rather than "0925" in reports
    #[serde(default = "default_human_months")]
    pub human_month_names: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_history_window() -> u32 {
    12
}

fn default_human_months() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            history_window_months: default_history_window(),
            human_month_names: default_human_months(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &TuitionPaths) -> Result<Self, TuitionError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TuitionError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TuitionError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TuitionPaths) -> Result<(), TuitionError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TuitionError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TuitionError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// History window, never less than one month
    pub fn history_window(&self) -> u32 {
        self.history_window_months.max(1)
    }
}
