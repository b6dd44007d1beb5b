//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::domain::period::{Granularity, WeekStart};
use serde::{Deserialize, Serialize};

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Backup run settings
    pub backup: BackupSection,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BackupConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.backup.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Backup run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupSection {
    /// Period length of one backup file (daily, weekly, monthly, yearly)
    #[serde(default)]
    pub granularity: Granularity,

    /// Records fetched per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Folder the backup files are written to
    #[serde(default = "default_target_folder")]
    pub target_folder: String,

    /// Base name of the backup files
    pub file_name: String,

    /// First day of the week for weekly backups (sunday, monday)
    #[serde(default)]
    pub week_start: WeekStart,

    /// Abort a period that needs more pages than this
    #[serde(default = "default_max_pages_per_period")]
    pub max_pages_per_period: usize,

    /// Create the target folder when it does not exist
    #[serde(default = "default_true")]
    pub create_target_folder: bool,
}

impl BackupSection {
    fn validate(&self) -> Result<(), String> {
        if !(1..=100_000).contains(&self.page_size) {
            return Err(format!(
                "backup.page_size must be between 1 and 100000, got {}",
                self.page_size
            ));
        }

        if self.target_folder.trim().is_empty() {
            return Err("backup.target_folder cannot be empty".to_string());
        }

        if self.file_name.trim().is_empty() {
            return Err("backup.file_name cannot be empty".to_string());
        }

        if self.file_name.contains(['/', '\\']) {
            return Err(format!(
                "backup.file_name '{}' must not contain path separators",
                self.file_name
            ));
        }

        if self.max_pages_per_period == 0 {
            return Err("backup.max_pages_per_period must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err(
                "logging.local_path cannot be empty when local logging is enabled".to_string(),
            );
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> usize {
    crate::core::export::DEFAULT_PAGE_SIZE
}

fn default_max_pages_per_period() -> usize {
    crate::core::export::DEFAULT_MAX_PAGES_PER_PERIOD
}

fn default_target_folder() -> String {
    "./backup".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
