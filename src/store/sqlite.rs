//! SQLite-backed document store.
//!
//! Bookmark records live in a single `bookmarks` table with the 12-byte id as
//! a BLOB primary key and tags as a JSON-encoded TEXT column. The JSON column
//! is opaque to SQL, so every predicate except `ById` scans the table and
//! evaluates [`Filter::matches`] in Rust — the predicate enum stays the single
//! source of matching semantics.

use rusqlite::params;
use rusqlite::params_from_iter;
use rusqlite::types::Value;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::database::connection::Database;
use crate::store::filter::Filter;
use crate::store::object_id::{ObjectId, ID_LEN};
use crate::store::update::UpdateDocument;
use crate::store::DocumentStore;
use crate::types::bookmark::StoredBookmark;
use crate::types::errors::StoreError;

/// Document store backed by a SQLite database.
pub struct SqliteStore {
    db: Arc<Database>,
}

/// Raw column tuple as read from SQLite, before decoding.
type RawRow = (Vec<u8>, String, String, String, i64, i64);

impl SqliteStore {
    /// Creates a store over an opened database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Reads one raw row from a result set.
    fn read_raw(row: &rusqlite::Row) -> rusqlite::Result<RawRow> {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
        ))
    }

    /// Decodes a raw row into a `StoredBookmark`.
    fn decode(raw: RawRow) -> Result<StoredBookmark, StoreError> {
        let (id_blob, name, url, tags_json, created_at, updated_at) = raw;

        let id_bytes: [u8; ID_LEN] = id_blob
            .try_into()
            .map_err(|blob: Vec<u8>| StoreError::Decode(format!("id blob is {} bytes", blob.len())))?;

        let tags: Vec<String> = serde_json::from_str(&tags_json)
            .map_err(|e| StoreError::Decode(format!("tags column: {}", e)))?;

        Ok(StoredBookmark {
            id: ObjectId::from_bytes(id_bytes),
            name,
            url,
            tags,
            created_at,
            updated_at,
        })
    }

    /// Fetches all rows matching the filter, using `WHERE id = ?` for exact-id
    /// predicates and a scan for everything else.
    fn select(&self, filter: &Filter) -> Result<Vec<StoredBookmark>, StoreError> {
        let conn = self.db.connection();

        let raw_rows: Vec<RawRow> = if let Some(id) = filter.exact_id() {
            let mut stmt = conn
                .prepare(
                    "SELECT id, name, url, tags, created_at, updated_at \
                     FROM bookmarks WHERE id = ?1",
                )
                .map_err(|e| StoreError::Backend(e.to_string()))?;
            let rows = stmt
                .query_map(params![id.as_bytes().as_slice()], Self::read_raw)
                .map_err(|e| StoreError::Backend(e.to_string()))?;
            rows.collect::<rusqlite::Result<_>>()
                .map_err(|e| StoreError::Backend(e.to_string()))?
        } else {
            let mut stmt = conn
                .prepare(
                    "SELECT id, name, url, tags, created_at, updated_at \
                     FROM bookmarks ORDER BY rowid",
                )
                .map_err(|e| StoreError::Backend(e.to_string()))?;
            let rows = stmt
                .query_map([], Self::read_raw)
                .map_err(|e| StoreError::Backend(e.to_string()))?;
            rows.collect::<rusqlite::Result<_>>()
                .map_err(|e| StoreError::Backend(e.to_string()))?
        };

        let mut results = Vec::new();
        for raw in raw_rows {
            let record = Self::decode(raw)?;
            if filter.matches(&record) {
                results.push(record);
            }
        }
        Ok(results)
    }
}

impl DocumentStore for SqliteStore {
    fn find(&self, filter: &Filter) -> Result<Vec<StoredBookmark>, StoreError> {
        self.select(filter)
    }

    fn find_one(&self, filter: &Filter) -> Result<Option<StoredBookmark>, StoreError> {
        Ok(self.select(filter)?.into_iter().next())
    }

    fn insert_one(&self, record: &StoredBookmark) -> Result<ObjectId, StoreError> {
        let tags_json = serde_json::to_string(&record.tags)
            .map_err(|e| StoreError::Decode(format!("tags column: {}", e)))?;

        self.db
            .connection()
            .execute(
                "INSERT INTO bookmarks (id, name, url, tags, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.id.as_bytes().as_slice(),
                    record.name,
                    record.url,
                    tags_json,
                    record.created_at,
                    record.updated_at,
                ],
            )
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(record.id)
    }

    fn update_one(&self, filter: &Filter, update: &UpdateDocument) -> Result<u64, StoreError> {
        let target = match filter.exact_id() {
            Some(id) => Some(*id),
            None => self.find_one(filter)?.map(|r| r.id),
        };
        let id = match target {
            Some(id) => id,
            None => return Ok(0),
        };

        if update.is_empty() {
            // Zero-field update is a legal no-op; still report whether the
            // record matched.
            return Ok(u64::from(self.find_one(&Filter::ById(id))?.is_some()));
        }

        // Dynamic SET clause over the present fields only.
        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();
        if let Some(name) = &update.name {
            sets.push("name = ?");
            values.push(Value::Text(name.clone()));
        }
        if let Some(url) = &update.url {
            sets.push("url = ?");
            values.push(Value::Text(url.clone()));
        }
        if let Some(tags) = &update.tags {
            let tags_json = serde_json::to_string(tags)
                .map_err(|e| StoreError::Decode(format!("tags column: {}", e)))?;
            sets.push("tags = ?");
            values.push(Value::Text(tags_json));
        }
        sets.push("updated_at = ?");
        values.push(Value::Integer(Self::now()));
        values.push(Value::Blob(id.as_bytes().to_vec()));

        let sql = format!("UPDATE bookmarks SET {} WHERE id = ?", sets.join(", "));
        let affected = self
            .db
            .connection()
            .execute(&sql, params_from_iter(values))
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(affected as u64)
    }

    fn delete_one(&self, filter: &Filter) -> Result<u64, StoreError> {
        let target = match filter.exact_id() {
            Some(id) => Some(*id),
            None => self.find_one(filter)?.map(|r| r.id),
        };
        let id = match target {
            Some(id) => id,
            None => return Ok(0),
        };

        let affected = self
            .db
            .connection()
            .execute(
                "DELETE FROM bookmarks WHERE id = ?1",
                params![id.as_bytes().as_slice()],
            )
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(affected as u64)
    }
}
