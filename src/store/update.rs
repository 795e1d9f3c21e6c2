//! Partial update documents.
//!
//! An [`UpdateDocument`] carries only the fields the caller actually supplied.
//! Presence, not emptiness, governs inclusion: `Some("")` sets the name to the
//! empty string, `None` leaves it untouched. The all-`None` document is legal
//! and applies as a no-op.

/// A "set these fields" mutation for a single bookmark record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDocument {
    pub name: Option<String>,
    pub url: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdateDocument {
    /// Builds an update from the sparse fields of an update request.
    pub fn new(name: Option<String>, url: Option<String>, tags: Option<Vec<String>>) -> Self {
        Self { name, url, tags }
    }

    /// True when no field is set — applying it leaves the record unchanged.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none() && self.tags.is_none()
    }
}
