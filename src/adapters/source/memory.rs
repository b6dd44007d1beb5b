//! In-memory data service
//!
//! [`MemoryDataService`] keeps records in a `Vec` and implements
//! [`BackupDataService`] with filter-based paging: every `get_data` call
//! returns the oldest-inserted records of the window that are still present,
//! so page 1 always yields the next unexported batch.

use super::format::DelimitedRecord;
use super::traits::BackupDataService;
use crate::domain::{BackupError, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::{Mutex, MutexGuard};

/// Record that can be held by [`MemoryDataService`]
pub trait BackupEntity: DelimitedRecord + Clone + PartialEq + Send + Sync {
    /// Timestamp used to assign the record to a period
    fn timestamp(&self) -> NaiveDateTime;
}

/// Data service backed by a vector
///
/// # Examples
///
/// ```
/// use entity_backup::adapters::source::{BackupEntity, DelimitedRecord, MemoryDataService};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// #[derive(Clone, PartialEq)]
/// struct Event {
///     id: u32,
///     at: NaiveDateTime,
/// }
///
/// impl DelimitedRecord for Event {
///     fn fields(&self) -> Vec<String> {
///         vec![self.id.to_string(), self.at.to_string()]
///     }
/// }
///
/// impl BackupEntity for Event {
///     fn timestamp(&self) -> NaiveDateTime {
///         self.at
///     }
/// }
///
/// let at = NaiveDate::from_ymd_opt(2023, 7, 19).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let service = MemoryDataService::with_records(vec![Event { id: 1, at }]);
/// assert_eq!(service.len(), 1);
/// ```
#[derive(Debug)]
pub struct MemoryDataService<E> {
    records: Mutex<Vec<E>>,
    requested_pages: Mutex<Vec<usize>>,
}

impl<E: BackupEntity> MemoryDataService<E> {
    /// Create an empty service
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a service holding `records`
    pub fn with_records(records: Vec<E>) -> Self {
        Self {
            records: Mutex::new(records),
            requested_pages: Mutex::new(Vec::new()),
        }
    }

    /// Number of records not yet removed
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Whether every record has been removed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the records not yet removed, in insertion order
    pub fn records(&self) -> Vec<E> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Page indexes passed to `get_data` so far, in call order
    pub fn requested_pages(&self) -> Vec<usize> {
        self.requested_pages
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    fn lock_records(&self) -> Result<MutexGuard<'_, Vec<E>>> {
        self.records
            .lock()
            .map_err(|e| BackupError::DataSource(format!("Record store lock poisoned: {e}")))
    }
}

impl<E: BackupEntity> Default for MemoryDataService<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: BackupEntity> BackupDataService for MemoryDataService<E> {
    type Entity = E;

    async fn get_data(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        page_size: usize,
        page_index: usize,
    ) -> Result<Vec<E>> {
        if let Ok(mut pages) = self.requested_pages.lock() {
            pages.push(page_index);
        }

        let records = self.lock_records()?;
        Ok(records
            .iter()
            .filter(|r| {
                let ts = r.timestamp();
                ts >= from && ts < to
            })
            .take(page_size)
            .cloned()
            .collect())
    }

    fn format_as_string(&self, entity: &E, buffer: &mut String) -> Result<()> {
        entity.write_line(buffer)
    }

    async fn remove_data(&self, entities: &[E]) -> Result<usize> {
        let mut records = self.lock_records()?;
        let mut removed = 0;

        for entity in entities {
            if let Some(pos) = records.iter().position(|r| r == entity) {
                records.remove(pos);
                removed += 1;
            }
        }

        Ok(removed)
    }
}
