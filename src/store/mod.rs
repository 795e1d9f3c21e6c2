//! Document store abstraction and its SQLite implementation.
//!
//! The repository talks to storage only through the [`DocumentStore`] trait,
//! so tests can inject an in-memory database (or a mock) without touching the
//! orchestration logic.

pub mod filter;
pub mod object_id;
pub mod sqlite;
pub mod update;

use crate::store::filter::Filter;
use crate::store::object_id::ObjectId;
use crate::store::update::UpdateDocument;
use crate::types::bookmark::StoredBookmark;
use crate::types::errors::StoreError;

/// Find/insert/update/delete over bookmark records with filter predicates.
///
/// Each call is individually atomic; no guarantee spans two calls.
pub trait DocumentStore {
    /// Returns all records matching the filter, in insertion order.
    fn find(&self, filter: &Filter) -> Result<Vec<StoredBookmark>, StoreError>;

    /// Returns the first record matching the filter, if any.
    fn find_one(&self, filter: &Filter) -> Result<Option<StoredBookmark>, StoreError>;

    /// Inserts a record and returns its identifier.
    fn insert_one(&self, record: &StoredBookmark) -> Result<ObjectId, StoreError>;

    /// Applies a partial update to the first record matching the filter.
    /// Returns the matched count (0 or 1).
    fn update_one(&self, filter: &Filter, update: &UpdateDocument) -> Result<u64, StoreError>;

    /// Deletes the first record matching the filter. Returns the deleted
    /// count (0 or 1).
    fn delete_one(&self, filter: &Filter) -> Result<u64, StoreError>;
}
