//! Bookmark repository — the orchestrator behind every RPC operation.
//!
//! Implements `BookmarkRepositoryTrait` over any [`DocumentStore`], composing
//! the identifier codec, filter predicates, and partial-update documents. The
//! store is injected at construction so tests can run against an in-memory
//! database.

use ring::rand::SystemRandom;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::store::filter::Filter;
use crate::store::object_id::ObjectId;
use crate::store::update::UpdateDocument;
use crate::store::DocumentStore;
use crate::types::bookmark::{Bookmark, StoredBookmark};
use crate::types::errors::BookmarkError;

/// Trait defining the bookmark query/mutation operations.
pub trait BookmarkRepositoryTrait {
    /// Lists every bookmark. An empty store yields an empty vec, never an error.
    fn list(&self) -> Result<Vec<Bookmark>, BookmarkError>;
    /// Lists bookmarks whose name contains the fragment (case-insensitive).
    fn list_by_name(&self, name: &str) -> Result<Vec<Bookmark>, BookmarkError>;
    /// Lists bookmarks matching every query tag (substring, case-insensitive).
    fn list_by_tags(&self, tags: &[String]) -> Result<Vec<Bookmark>, BookmarkError>;
    /// Fetches a single bookmark by its hex id.
    fn get_by_id(&self, id: &str) -> Result<Bookmark, BookmarkError>;
    /// Creates a bookmark with a freshly minted id.
    fn create(&self, name: &str, url: &str, tags: &[String]) -> Result<Bookmark, BookmarkError>;
    /// Applies a partial update and returns the resulting record.
    fn update(&self, id: &str, update: UpdateDocument) -> Result<Bookmark, BookmarkError>;
    /// Deletes a bookmark. Returns the confirmed hex id.
    fn delete(&self, id: &str) -> Result<String, BookmarkError>;
}

/// Bookmark repository backed by a document store.
///
/// Stateless apart from the injected store and the RNG used for minting, so a
/// single instance is safely shared by any number of callers.
pub struct BookmarkRepository<S: DocumentStore> {
    store: S,
    rng: SystemRandom,
}

impl<S: DocumentStore> BookmarkRepository<S> {
    /// Creates a repository over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            rng: SystemRandom::new(),
        }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Decodes an external hex id, failing before any store call is made.
    fn decode_id(id: &str) -> Result<ObjectId, BookmarkError> {
        ObjectId::parse(id).map_err(|_| BookmarkError::InvalidId(id.to_string()))
    }

    fn find_wire(&self, filter: &Filter) -> Result<Vec<Bookmark>, BookmarkError> {
        let records = self.store.find(filter)?;
        Ok(records.iter().map(StoredBookmark::to_wire).collect())
    }
}

impl<S: DocumentStore> BookmarkRepositoryTrait for BookmarkRepository<S> {
    fn list(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        self.find_wire(&Filter::All)
    }

    fn list_by_name(&self, name: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        self.find_wire(&Filter::NameContains(name.to_string()))
    }

    fn list_by_tags(&self, tags: &[String]) -> Result<Vec<Bookmark>, BookmarkError> {
        self.find_wire(&Filter::HasAllTags(tags.to_vec()))
    }

    fn get_by_id(&self, id: &str) -> Result<Bookmark, BookmarkError> {
        let oid = Self::decode_id(id)?;
        match self.store.find_one(&Filter::ById(oid))? {
            Some(record) => Ok(record.to_wire()),
            None => Err(BookmarkError::NotFound(id.to_string())),
        }
    }

    fn create(&self, name: &str, url: &str, tags: &[String]) -> Result<Bookmark, BookmarkError> {
        if name.is_empty() {
            return Err(BookmarkError::InvalidArgument("name must not be empty".to_string()));
        }
        if url.is_empty() {
            return Err(BookmarkError::InvalidArgument("url must not be empty".to_string()));
        }

        let id = ObjectId::mint(&self.rng)
            .map_err(|e| BookmarkError::StoreError(e.to_string()))?;
        let record = StoredBookmark::new(id, name, url, tags, Self::now());
        self.store.insert_one(&record)?;

        Ok(record.to_wire())
    }

    fn update(&self, id: &str, update: UpdateDocument) -> Result<Bookmark, BookmarkError> {
        let oid = Self::decode_id(id)?;
        let filter = Filter::ById(oid);

        let matched = self.store.update_one(&filter, &update)?;
        if matched == 0 {
            return Err(BookmarkError::NotFound(id.to_string()));
        }

        // Blind mutation, then a separate read. A concurrent delete between
        // the two calls surfaces as NotFound rather than a store error.
        match self.store.find_one(&filter)? {
            Some(record) => Ok(record.to_wire()),
            None => Err(BookmarkError::NotFound(id.to_string())),
        }
    }

    fn delete(&self, id: &str) -> Result<String, BookmarkError> {
        let oid = Self::decode_id(id)?;
        let deleted = self.store.delete_one(&Filter::ById(oid))?;
        if deleted == 0 {
            return Err(BookmarkError::NotFound(id.to_string()));
        }
        Ok(oid.to_hex())
    }
}
