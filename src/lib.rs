// entity-backup - periodic entity backup files
// Licensed under the MIT License

//! # entity-backup
//!
//! Moves entities out of a data source into one delimited text file per
//! calendar period (day, week, month or year), removing every record from
//! the source once it has been written.
//!
//! ## Architecture
//!
//! - [`core`] - Period calculation and the backup engine
//! - [`adapters`] - The data service contract, an in-memory service and the
//!   delimited record formatter
//! - [`domain`] - Errors, periods and granularities
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use entity_backup::adapters::source::BackupDataService;
//! use entity_backup::config::load_config;
//! use entity_backup::core::export::{BackupEngine, BackupOptions};
//! use chrono::NaiveDate;
//!
//! # async fn example<S: BackupDataService>(service: S) -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("entity-backup.toml")?;
//! let engine = BackupEngine::new(service, BackupOptions::from_config(&config.backup));
//!
//! let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let to = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let summary = engine.run(from, to).await?;
//!
//! println!("Exported {} records into {} files", summary.records_exported, summary.files_written);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All library errors are [`domain::BackupError`]. A run stops at the first
//! error; files of periods that finished earlier stay on disk.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
