//! Data source abstraction layer
//!
//! This module defines the contract between the export engine and whatever
//! store holds the records to archive. Hosts implement [`BackupDataService`]
//! for each entity kind; the engine pages through it, formats every record
//! and then asks it to remove what was written.

pub mod format;
pub mod memory;
pub mod traits;

pub use format::{write_delimited_line, DelimitedRecord, DEFAULT_DELIMITER};
pub use memory::{BackupEntity, MemoryDataService};
pub use traits::BackupDataService;
