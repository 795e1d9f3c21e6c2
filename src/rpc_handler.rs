//! RPC method handler for the bookmarkd JSON-RPC protocol.
//!
//! Extracted from `main.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! bookmark repository via the `App` struct. Params deserialize once into
//! per-operation request structs; malformed arguments fail here, before any
//! store call.

use std::sync::Mutex;

use crate::app::App;
use crate::repository::BookmarkRepositoryTrait;
use crate::store::update::UpdateDocument;
use crate::types::errors::BookmarkError;
use crate::types::requests::{
    CreateRequest, DeleteRequest, GetByIdRequest, ListByNameRequest, ListByTagsRequest,
    UpdateRequest,
};

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Deserializes the params object into a typed request struct.
fn parse_params<T: DeserializeOwned>(params: &Value) -> Result<T, String> {
    serde_json::from_value(params.clone())
        .map_err(|e| BookmarkError::InvalidArgument(e.to_string()).to_string())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Queries ───
        "bookmark.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let bookmarks = a.repository.list().map_err(|e| e.to_string())?;
            serde_json::to_value(bookmarks).map_err(|e| e.to_string())
        }
        "bookmark.listByID" => {
            let req: GetByIdRequest = parse_params(params)?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let bookmark = a.repository.get_by_id(&req.id).map_err(|e| e.to_string())?;
            serde_json::to_value(bookmark).map_err(|e| e.to_string())
        }
        "bookmark.listByName" => {
            let req: ListByNameRequest = parse_params(params)?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let bookmarks = a
                .repository
                .list_by_name(&req.name)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(bookmarks).map_err(|e| e.to_string())
        }
        "bookmark.listByTags" => {
            let req: ListByTagsRequest = parse_params(params)?;
            if req.tags.is_empty() {
                return Err(BookmarkError::InvalidArgument(
                    "tags must not be empty".to_string(),
                )
                .to_string());
            }
            let a = app.lock().map_err(|e| e.to_string())?;
            let bookmarks = a
                .repository
                .list_by_tags(&req.tags)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(bookmarks).map_err(|e| e.to_string())
        }

        // ─── Mutations ───
        "bookmark.create" => {
            let req: CreateRequest = parse_params(params)?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let bookmark = a
                .repository
                .create(&req.name, &req.url, &req.tags)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(bookmark).map_err(|e| e.to_string())
        }
        "bookmark.update" => {
            let req: UpdateRequest = parse_params(params)?;
            let update = UpdateDocument::new(req.name, req.url, req.tags);
            let a = app.lock().map_err(|e| e.to_string())?;
            let bookmark = a
                .repository
                .update(&req.id, update)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(bookmark).map_err(|e| e.to_string())
        }
        "bookmark.delete" => {
            let req: DeleteRequest = parse_params(params)?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let id = a.repository.delete(&req.id).map_err(|e| e.to_string())?;
            Ok(json!({ "id": id }))
        }

        // ─── Ping ───
        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}
