//! App core for bookmarkd.
//!
//! Central struct wiring the database, document store, and repository.

use std::sync::Arc;

use crate::database::connection::Database;
use crate::repository::BookmarkRepository;
use crate::store::sqlite::SqliteStore;

/// Central application struct holding the bookmark repository.
///
/// The repository owns the SQLite-backed store (and through it the database
/// handle), so nothing else needs direct connection access.
pub struct App {
    pub repository: BookmarkRepository<SqliteStore>,
}

impl App {
    /// Creates a new App: opens the database, runs migrations, and builds the
    /// repository over a SQLite-backed document store.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        let repository = BookmarkRepository::new(SqliteStore::new(db));
        Ok(Self { repository })
    }
}
