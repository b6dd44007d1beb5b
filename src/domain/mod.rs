//! Domain models and types for entity-backup.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Period types** ([`Period`], [`Granularity`], [`WeekStart`])
//! - **Error types** ([`BackupError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, BackupError>`]:
//!
//! ```rust
//! use entity_backup::domain::{Granularity, Result};
//!
//! fn example() -> Result<Granularity> {
//!     // Errors are automatically converted using the ? operator
//!     let granularity = "monthly".parse::<Granularity>()?;
//!     Ok(granularity)
//! }
//! ```

pub mod errors;
pub mod period;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::BackupError;
pub use period::{Granularity, Period, WeekStart};
pub use result::Result;
