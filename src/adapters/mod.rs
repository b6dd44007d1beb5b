//! Data source integrations.
//!
//! - [`source`] - The [`source::BackupDataService`] contract the backup
//!   engine drives, a delimited record formatter and an in-memory service.
//!
//! Hosts plug their own store in by implementing
//! [`source::BackupDataService`] for it.

pub mod source;
