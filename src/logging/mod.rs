//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output with configurable log levels
//! - JSON-formatted local file logs with rotation
//!
//! # Example
//!
//! ```no_run
//! use entity_backup::logging::init_logging;
//! use entity_backup::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a backup period
///
/// # Example
///
/// ```no_run
/// use entity_backup::log_period_start;
///
/// log_period_start!("2023-07-19..2023-07-20", "/var/backup/orders_20230719.csv");
/// ```
#[macro_export]
macro_rules! log_period_start {
    ($period:expr, $path:expr) => {
        tracing::debug!(
            period = %$period,
            path = %$path,
            "Backing up period"
        );
    };
}

/// Log a page appended to a backup file
///
/// # Example
///
/// ```no_run
/// use entity_backup::log_page_written;
///
/// log_page_written!(1, 50, "/var/backup/orders_20230719.csv");
/// ```
#[macro_export]
macro_rules! log_page_written {
    ($page:expr, $count:expr, $path:expr) => {
        tracing::debug!(
            page = $page,
            count = $count,
            path = %$path,
            "Page written"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use entity_backup::log_error_with_context;
/// use entity_backup::domain::BackupError;
///
/// let error = BackupError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
