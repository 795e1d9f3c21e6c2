//! Filter predicates for bookmark queries.
//!
//! A [`Filter`] is the storage-layer predicate the repository builds from API
//! arguments. Matching semantics live here and nowhere else, so the SQLite
//! store and any test double agree on what a query means.

use crate::store::object_id::ObjectId;
use crate::types::bookmark::StoredBookmark;

/// A storage-layer filter predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Matches every record.
    All,
    /// Case-insensitive substring match on `name`. An empty fragment matches
    /// everything.
    NameContains(String),
    /// Conjunctive tag search: every query tag must match at least one stored
    /// tag as a case-insensitive substring. An empty query list matches every
    /// record (vacuous AND) — not "match nothing".
    HasAllTags(Vec<String>),
    /// Matches the single record with this identifier.
    ById(ObjectId),
}

impl Filter {
    /// Evaluates the predicate against a stored record.
    pub fn matches(&self, record: &StoredBookmark) -> bool {
        match self {
            Filter::All => true,
            Filter::NameContains(fragment) => {
                record.name.to_lowercase().contains(&fragment.to_lowercase())
            }
            Filter::HasAllTags(tags) => tags.iter().all(|query| {
                let query = query.to_lowercase();
                record
                    .tags
                    .iter()
                    .any(|stored| stored.to_lowercase().contains(&query))
            }),
            Filter::ById(id) => record.id == *id,
        }
    }

    /// Returns the identifier when the predicate is an exact id match.
    ///
    /// Lets the SQLite store compile `ById` into `WHERE id = ?` instead of a
    /// table scan.
    pub fn exact_id(&self) -> Option<&ObjectId> {
        match self {
            Filter::ById(id) => Some(id),
            _ => None,
        }
    }
}
