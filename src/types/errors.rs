use std::fmt;

// === AuthError ===

/// Errors surfaced by the identity provider client.
#[derive(Debug)]
pub enum AuthError {
    /// The identity provider rejected or failed the request.
    Provider(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Provider(msg) => write!(f, "Identity provider error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

// === StoreError ===

/// Errors surfaced by the relational data store client.
#[derive(Debug)]
pub enum StoreError {
    /// A select against the bookmarks table failed.
    Query(String),
    /// An insert into the bookmarks table failed.
    Insert(String),
    /// A delete against the bookmarks table failed.
    Delete(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Query(msg) => write!(f, "Bookmark query failed: {}", msg),
            StoreError::Insert(msg) => write!(f, "Bookmark insert failed: {}", msg),
            StoreError::Delete(msg) => write!(f, "Bookmark delete failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
