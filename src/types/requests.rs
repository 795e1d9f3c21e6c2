//! Typed request structures for each RPC operation.
//!
//! Params are deserialized once at the gateway boundary, so handlers never
//! poke at an untyped JSON bag. A missing optional field stays `None`; an
//! explicitly supplied empty string is `Some("")` — the distinction drives
//! partial updates.

use serde::Deserialize;

/// `bookmark.listByID` — fetch a single bookmark by its hex id.
#[derive(Debug, Deserialize)]
pub struct GetByIdRequest {
    pub id: String,
}

/// `bookmark.listByName` — case-insensitive substring search on name.
#[derive(Debug, Deserialize)]
pub struct ListByNameRequest {
    pub name: String,
}

/// `bookmark.listByTags` — conjunctive tag search.
#[derive(Debug, Deserialize)]
pub struct ListByTagsRequest {
    pub tags: Vec<String>,
}

/// `bookmark.create` — `tags` may be omitted and defaults to empty.
#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// `bookmark.update` — only present fields are written.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub id: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// `bookmark.delete` — destructive, immediate.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub id: String,
}
