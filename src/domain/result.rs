//! Result type alias for entity-backup
//!
//! This module provides a convenient Result type alias that uses BackupError
//! as the error type.

use super::errors::BackupError;

/// Result type alias for backup operations
///
/// # Examples
///
/// ```
/// use entity_backup::domain::result::Result;
/// use entity_backup::domain::errors::BackupError;
///
/// fn example_function() -> Result<usize> {
///     Ok(50)
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(BackupError::Configuration("page_size must be positive".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, BackupError>;
