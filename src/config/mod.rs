//! Configuration management for entity-backup.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - `ENTITY_BACKUP_<SECTION>_<KEY>` environment overrides
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use entity_backup::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("entity-backup.toml")?;
//!
//! println!("Granularity: {}", config.backup.granularity);
//! println!("Target folder: {}", config.backup.target_folder);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`BackupSection`] - Granularity, page size, target folder and file name
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [backup]
//! granularity = "monthly"
//! page_size = 50
//! target_folder = "${BACKUP_ROOT}/orders"
//! file_name = "orders"
//! week_start = "sunday"
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/entity-backup"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, ENV_PREFIX};
pub use schema::{ApplicationConfig, BackupConfig, BackupSection, LoggingConfig};
