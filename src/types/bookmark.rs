use serde::{Deserialize, Serialize};

/// A saved bookmark as it appears on the wire.
///
/// `id` and `created_at` are assigned by the backing store; both are
/// immutable for the lifetime of the record, as is `user_id`.
/// `created_at` is an RFC 3339 timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub user_id: String,
    pub created_at: String,
}

/// Insert payload for a new bookmark. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub user_id: String,
}
