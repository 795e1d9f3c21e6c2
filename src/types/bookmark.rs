use serde::{Deserialize, Serialize};

use crate::store::object_id::ObjectId;

/// A bookmark as it crosses the API boundary: string id, JSON-shaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub name: String,
    pub url: String,
    pub tags: Vec<String>,
}

/// A bookmark as it is persisted: binary id, storage-native.
///
/// `created_at` / `updated_at` are UNIX seconds maintained by the store and
/// never cross the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBookmark {
    pub id: ObjectId,
    pub name: String,
    pub url: String,
    pub tags: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl StoredBookmark {
    /// Creation-path constructor taking a freshly minted identifier.
    ///
    /// Updates never go through this path — they use
    /// [`crate::store::update::UpdateDocument`].
    pub fn new(id: ObjectId, name: &str, url: &str, tags: &[String], now: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            url: url.to_string(),
            tags: tags.to_vec(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Maps the storage shape to the wire shape.
    ///
    /// The single source of truth for the storage→wire field mapping: the id
    /// becomes its lowercase hex encoding, all other fields copy verbatim.
    pub fn to_wire(&self) -> Bookmark {
        Bookmark {
            id: self.id.to_hex(),
            name: self.name.clone(),
            url: self.url.clone(),
            tags: self.tags.clone(),
        }
    }
}
