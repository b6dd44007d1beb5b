//! Core business logic for entity-backup.
//!
//! # Modules
//!
//! - [`period`] - Period boundary arithmetic
//! - [`export`] - Backup engine, run options and summary
//!
//! # Backup Workflow
//!
//! 1. **Align**: Move `from` back to the start of its period
//! 2. **Rotate**: Delete an existing file for the period
//! 3. **Page**: Fetch up to `page_size` records of the period
//! 4. **Write**: Append the formatted page to the period file
//! 5. **Remove**: Ask the data service to remove the written records
//! 6. **Repeat**: Until the period is empty, then move to the next period
//! 7. **Report**: Return the backup summary
//!
//! # Example
//!
//! ```rust,no_run
//! use entity_backup::config::load_config;
//! use entity_backup::core::export::{BackupEngine, BackupOptions};
//! use entity_backup::adapters::source::BackupDataService;
//! use chrono::NaiveDateTime;
//!
//! # async fn example<S: BackupDataService>(
//! #     service: S,
//! #     from: NaiveDateTime,
//! #     to: NaiveDateTime,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("entity-backup.toml")?;
//! let engine = BackupEngine::new(service, BackupOptions::from_config(&config.backup));
//!
//! let summary = engine.run(from, to).await?;
//! println!("Files written: {}", summary.files_written);
//! println!("Records exported: {}", summary.records_exported);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod period;
