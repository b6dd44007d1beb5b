//! Backup orchestration
//!
//! This module provides the core backup logic, including:
//! - The period-by-period, page-by-page backup engine
//! - Run options and output file naming
//! - Summary and reporting

pub mod engine;
pub mod options;
pub mod summary;

pub use engine::BackupEngine;
pub use options::{
    BackupOptions, DEFAULT_MAX_PAGES_PER_PERIOD, DEFAULT_PAGE_SIZE, FILE_EXTENSION,
};
pub use summary::BackupSummary;
