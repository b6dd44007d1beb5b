//! Domain error types
//!
//! This module defines the error hierarchy for entity-backup.
//! All errors are domain-specific and don't expose third-party types.

use crate::domain::period::Period;
use thiserror::Error;

/// Main backup error type
///
/// This is the primary error type used throughout the crate. Data services
/// return it from their own operations and the engine propagates it unchanged.
#[derive(Debug, Error)]
pub enum BackupError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The data service failed to fetch or remove records
    #[error("Data source error: {0}")]
    DataSource(String),

    /// A record could not be formatted
    #[error("Format error: {0}")]
    Format(String),

    /// The data service reported that nothing was removed after a page was written
    #[error("No progress for period {period} at page {page}: written records were not removed")]
    Stalled { period: Period, page: usize },

    /// A period needed more pages than the configured limit
    #[error("Period {period} exceeded the limit of {limit} pages")]
    PageLimitExceeded { period: Period, limit: usize },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl BackupError {
    /// Whether the error comes from the progress safeguards of the engine
    pub fn is_stall(&self) -> bool {
        matches!(
            self,
            BackupError::Stalled { .. } | BackupError::PageLimitExceeded { .. }
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for BackupError {
    fn from(err: std::io::Error) -> Self {
        BackupError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for BackupError {
    fn from(err: serde_json::Error) -> Self {
        BackupError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for BackupError {
    fn from(err: toml::de::Error) -> Self {
        BackupError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv writer errors
impl From<csv::Error> for BackupError {
    fn from(err: csv::Error) -> Self {
        BackupError::Format(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn july() -> Period {
        Period::new(
            NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
        )
    }

    #[test]
    fn test_backup_error_display() {
        let err = BackupError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_stalled_display_names_period_and_page() {
        let err = BackupError::Stalled {
            period: july(),
            page: 3,
        };
        let message = err.to_string();
        assert!(message.contains("2023-07-01..2023-08-01"));
        assert!(message.contains("page 3"));
        assert!(err.is_stall());
    }

    #[test]
    fn test_page_limit_is_stall() {
        let err = BackupError::PageLimitExceeded {
            period: july(),
            limit: 10,
        };
        assert!(err.is_stall());
        assert!(!BackupError::Io("disk full".to_string()).is_stall());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: BackupError = io_err.into();
        assert!(matches!(err, BackupError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: BackupError = json_err.into();
        assert!(matches!(err, BackupError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: BackupError = toml_err.into();
        assert!(matches!(err, BackupError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_backup_error_implements_std_error() {
        let err = BackupError::DataSource("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
