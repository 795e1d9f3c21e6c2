//! Unit tests for the SQLite document store, exercised through the
//! `DocumentStore` trait with an in-memory database.

use std::sync::Arc;

use bookmarkd::database::Database;
use bookmarkd::store::filter::Filter;
use bookmarkd::store::object_id::ObjectId;
use bookmarkd::store::sqlite::SqliteStore;
use bookmarkd::store::update::UpdateDocument;
use bookmarkd::store::DocumentStore;
use bookmarkd::types::bookmark::StoredBookmark;

/// Helper: create a store backed by a fresh in-memory database.
fn setup() -> SqliteStore {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    SqliteStore::new(Arc::new(db))
}

fn sample(id_byte: u8, name: &str, tags: &[&str]) -> StoredBookmark {
    let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
    StoredBookmark::new(
        ObjectId::from_bytes([id_byte; 12]),
        name,
        "https://example.com",
        &tags,
        1_700_000_000,
    )
}

#[test]
fn test_insert_then_find_one_by_id() {
    let store = setup();
    let record = sample(1, "Example", &["web"]);

    let id = store.insert_one(&record).unwrap();
    assert_eq!(id, record.id);

    let found = store.find_one(&Filter::ById(record.id)).unwrap();
    assert_eq!(found, Some(record));
}

#[test]
fn test_find_one_absent_id_returns_none() {
    let store = setup();
    let found = store.find_one(&Filter::ById(ObjectId::from_bytes([9; 12]))).unwrap();
    assert!(found.is_none());
}

#[test]
fn test_find_all_preserves_insertion_order() {
    let store = setup();
    store.insert_one(&sample(1, "First", &[])).unwrap();
    store.insert_one(&sample(2, "Second", &[])).unwrap();
    store.insert_one(&sample(3, "Third", &[])).unwrap();

    let all = store.find(&Filter::All).unwrap();
    let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn test_find_by_name_filter() {
    let store = setup();
    store.insert_one(&sample(1, "Rust Programming", &[])).unwrap();
    store.insert_one(&sample(2, "Python Programming", &[])).unwrap();
    store.insert_one(&sample(3, "Example Site", &[])).unwrap();

    let hits = store
        .find(&Filter::NameContains("programming".to_string()))
        .unwrap();
    assert_eq!(hits.len(), 2);
}

#[test]
fn test_find_by_tags_filter() {
    let store = setup();
    store.insert_one(&sample(1, "A", &["golang", "mongodb"])).unwrap();
    store.insert_one(&sample(2, "B", &["golang"])).unwrap();
    store.insert_one(&sample(3, "C", &[])).unwrap();

    let hits = store
        .find(&Filter::HasAllTags(vec!["go".to_string(), "db".to_string()]))
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "A");
}

#[test]
fn test_tags_round_trip_preserves_order() {
    let store = setup();
    let record = sample(1, "Ordered", &["zeta", "alpha", "mid"]);
    store.insert_one(&record).unwrap();

    let found = store.find_one(&Filter::ById(record.id)).unwrap().unwrap();
    assert_eq!(found.tags, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_update_one_sets_only_present_fields() {
    let store = setup();
    let record = sample(1, "Before", &["old"]);
    store.insert_one(&record).unwrap();

    let update = UpdateDocument::new(None, None, Some(vec!["rust".to_string()]));
    let matched = store.update_one(&Filter::ById(record.id), &update).unwrap();
    assert_eq!(matched, 1);

    let after = store.find_one(&Filter::ById(record.id)).unwrap().unwrap();
    assert_eq!(after.name, "Before");
    assert_eq!(after.url, "https://example.com");
    assert_eq!(after.tags, vec!["rust"]);
}

#[test]
fn test_update_one_with_explicit_empty_name() {
    let store = setup();
    let record = sample(1, "Named", &[]);
    store.insert_one(&record).unwrap();

    // Some("") sets the name to empty — distinct from None, which leaves it alone
    let update = UpdateDocument::new(Some(String::new()), None, None);
    store.update_one(&Filter::ById(record.id), &update).unwrap();

    let after = store.find_one(&Filter::ById(record.id)).unwrap().unwrap();
    assert_eq!(after.name, "");
    assert_eq!(after.url, "https://example.com");
}

#[test]
fn test_empty_update_is_a_no_op() {
    let store = setup();
    let record = sample(1, "Untouched", &["keep"]);
    store.insert_one(&record).unwrap();

    let matched = store
        .update_one(&Filter::ById(record.id), &UpdateDocument::default())
        .unwrap();
    assert_eq!(matched, 1, "the record matched even though nothing was set");

    let after = store.find_one(&Filter::ById(record.id)).unwrap().unwrap();
    assert_eq!(after, record, "no-op update must leave the record identical");
}

#[test]
fn test_update_one_absent_id_matches_zero() {
    let store = setup();
    let update = UpdateDocument::new(Some("New".to_string()), None, None);
    let matched = store
        .update_one(&Filter::ById(ObjectId::from_bytes([9; 12])), &update)
        .unwrap();
    assert_eq!(matched, 0);
}

#[test]
fn test_update_one_bumps_updated_at() {
    let store = setup();
    let record = sample(1, "Stamped", &[]);
    store.insert_one(&record).unwrap();

    let update = UpdateDocument::new(Some("Restamped".to_string()), None, None);
    store.update_one(&Filter::ById(record.id), &update).unwrap();

    let after = store.find_one(&Filter::ById(record.id)).unwrap().unwrap();
    assert!(after.updated_at >= record.updated_at);
    assert_eq!(after.created_at, record.created_at);
}

#[test]
fn test_delete_one() {
    let store = setup();
    let record = sample(1, "Doomed", &[]);
    store.insert_one(&record).unwrap();

    let deleted = store.delete_one(&Filter::ById(record.id)).unwrap();
    assert_eq!(deleted, 1);
    assert!(store.find_one(&Filter::ById(record.id)).unwrap().is_none());
}

#[test]
fn test_delete_one_absent_id_deletes_zero() {
    let store = setup();
    let deleted = store
        .delete_one(&Filter::ById(ObjectId::from_bytes([9; 12])))
        .unwrap();
    assert_eq!(deleted, 0);
}

#[test]
fn test_update_one_by_non_id_filter() {
    let store = setup();
    store.insert_one(&sample(1, "Target", &[])).unwrap();

    let update = UpdateDocument::new(None, Some("https://moved.example".to_string()), None);
    let matched = store
        .update_one(&Filter::NameContains("target".to_string()), &update)
        .unwrap();
    assert_eq!(matched, 1);

    let after = store
        .find_one(&Filter::NameContains("target".to_string()))
        .unwrap()
        .unwrap();
    assert_eq!(after.url, "https://moved.example");
}
