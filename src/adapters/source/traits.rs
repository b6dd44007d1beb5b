//! Data service trait
//!
//! This module defines the trait that data sources must implement to be
//! archived by the export engine.

use crate::domain::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Data service trait for record export
///
/// One implementation exists per entity kind. Implementations own all
/// locking and consistency concerns of the underlying store.
#[async_trait]
pub trait BackupDataService: Send + Sync {
    /// Record type exported by this service
    type Entity: Send + Sync;

    /// Fetch one page of records that have not been exported yet
    ///
    /// # Arguments
    ///
    /// * `from` - Inclusive lower bound of the record timestamp
    /// * `to` - Exclusive upper bound of the record timestamp
    /// * `page_size` - Maximum number of records to return
    /// * `page_index` - 1-based page index within the current period
    ///
    /// Records removed by an earlier [`remove_data`](Self::remove_data) call
    /// must not be returned again. Services that filter on "not yet exported"
    /// can ignore `page_index`; it is there for offset-based paging.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    async fn get_data(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        page_size: usize,
        page_index: usize,
    ) -> Result<Vec<Self::Entity>>;

    /// Append one line for `entity` to `buffer`
    ///
    /// The line must include its own terminator. The default convention is
    /// semicolon-separated fields, see [`DelimitedRecord`](super::DelimitedRecord).
    ///
    /// # Errors
    ///
    /// Returns an error if the entity cannot be formatted.
    fn format_as_string(&self, entity: &Self::Entity, buffer: &mut String) -> Result<()>;

    /// Remove exactly the given records from the store
    ///
    /// The removal must be visible to the next `get_data` call.
    ///
    /// # Returns
    ///
    /// The number of records actually removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal fails.
    async fn remove_data(&self, entities: &[Self::Entity]) -> Result<usize>;
}
