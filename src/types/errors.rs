use std::fmt;

// === IdError ===

/// Errors related to identifier encoding and minting.
#[derive(Debug)]
pub enum IdError {
    /// The identifier string has the wrong length (expected 24 hex characters).
    InvalidLength(usize),
    /// The identifier string contains a non-hexadecimal character.
    InvalidHex(String),
    /// Failed to generate random bytes while minting a new identifier.
    RandomGeneration(String),
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdError::InvalidLength(len) => {
                write!(f, "Invalid identifier length: {} (expected 24)", len)
            }
            IdError::InvalidHex(s) => write!(f, "Invalid hex identifier: {}", s),
            IdError::RandomGeneration(msg) => {
                write!(f, "Random generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for IdError {}

// === StoreError ===

/// Errors surfaced by the document store layer.
#[derive(Debug)]
pub enum StoreError {
    /// The underlying database operation failed.
    Backend(String),
    /// A stored row could not be decoded into a bookmark record.
    Decode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Backend(msg) => write!(f, "Store backend error: {}", msg),
            StoreError::Decode(msg) => write!(f, "Store decode error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === BookmarkError ===

/// Errors related to bookmark repository operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// The supplied external identifier is not a valid hex-encoded id.
    InvalidId(String),
    /// A request argument was missing or malformed.
    InvalidArgument(String),
    /// No bookmark matched the given identifier.
    NotFound(String),
    /// The document store failed.
    StoreError(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::InvalidId(id) => write!(f, "Invalid bookmark id: {}", id),
            BookmarkError::InvalidArgument(msg) => {
                write!(f, "Invalid argument: {}", msg)
            }
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::StoreError(msg) => write!(f, "Bookmark store error: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}

impl From<StoreError> for BookmarkError {
    fn from(err: StoreError) -> Self {
        BookmarkError::StoreError(err.to_string())
    }
}
