//! Path management for the tuition ledger
//!
//! ## Path Resolution Order
//!
//! 1. `TUITION_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/tuition-ledger` or `~/.config/tuition-ledger`
//! 3. Windows: `%APPDATA%\tuition-ledger`

use std::path::PathBuf;

use crate::error::TuitionError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "TUITION_DATA_DIR";

/// Manages all paths used by the application
#[derive(Debug, Clone)]
pub struct TuitionPaths {
    base_dir: PathBuf,
}

impl TuitionPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be found.
    pub fn new() -> Result<Self, TuitionError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to students.json
    pub fn students_file(&self) -> PathBuf {
        self.data_dir().join("students.json")
    }

    /// Get the path to fees.json (explicit payment records)
    pub fn fees_file(&self) -> PathBuf {
        self.data_dir().join("fees.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), TuitionError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TuitionError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TuitionError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the ledger has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TuitionError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| TuitionError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("tuition-ledger"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TuitionError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TuitionError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("tuition-ledger"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TuitionPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TuitionPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TuitionPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.students_file(),
            temp_dir.path().join("data").join("students.json")
        );
        assert_eq!(
            paths.fees_file(),
            temp_dir.path().join("data").join("fees.json")
        );
    }
}
