//! Delimited line formatting
//!
//! Default record format for backup files: one line per record, fields
//! separated by `;`, terminated by `\n`. Fields that contain the delimiter,
//! quotes or line breaks are quoted so every record stays on one logical line.

use crate::domain::{BackupError, Result};

/// Field delimiter used by [`DelimitedRecord::write_line`]
pub const DEFAULT_DELIMITER: u8 = b';';

/// Record that can be written as one delimited line
///
/// # Examples
///
/// ```
/// use entity_backup::adapters::source::DelimitedRecord;
///
/// struct Order {
///     id: u32,
///     customer: String,
/// }
///
/// impl DelimitedRecord for Order {
///     fn fields(&self) -> Vec<String> {
///         vec![self.id.to_string(), self.customer.clone()]
///     }
/// }
///
/// let mut buffer = String::new();
/// Order { id: 7, customer: "ACME".to_string() }
///     .write_line(&mut buffer)
///     .unwrap();
/// assert_eq!(buffer, "7;ACME\n");
/// ```
pub trait DelimitedRecord {
    /// Field values in output order
    fn fields(&self) -> Vec<String>;

    /// Append the record as a `;`-delimited line
    fn write_line(&self, buffer: &mut String) -> Result<()> {
        write_delimited_line(buffer, self.fields(), DEFAULT_DELIMITER)
    }
}

/// Append `fields` to `buffer` as one delimited line ending in `\n`
///
/// # Errors
///
/// Returns [`BackupError::Format`] if the line cannot be encoded.
pub fn write_delimited_line<I, F>(buffer: &mut String, fields: I, delimiter: u8) -> Result<()>
where
    I: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(fields)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| BackupError::Format(format!("Failed to flush record: {e}")))?;
    let line = String::from_utf8(bytes)
        .map_err(|e| BackupError::Format(format!("Record is not valid UTF-8: {e}")))?;

    buffer.push_str(&line);
    Ok(())
}
