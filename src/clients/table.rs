//! Relational data store client seam, scoped to the bookmarks table.

use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::errors::StoreError;

/// Trait defining the bookmarks-table operations.
pub trait BookmarkTable {
    /// Selects all rows owned by `owner_id`, ordered by creation
    /// timestamp descending (newest first).
    async fn select_by_owner(&self, owner_id: &str) -> Result<Vec<Bookmark>, StoreError>;

    /// Inserts a new row. The store assigns `id` and `created_at`.
    ///
    /// No row is returned: the created record reaches clients through
    /// the realtime insert event, never through this response.
    async fn insert(&self, row: NewBookmark) -> Result<(), StoreError>;

    /// Deletes the row with the given identifier, returning the deleted
    /// row(s). An unknown identifier yields an empty vec, not an error.
    async fn delete_by_id(&self, id: &str) -> Result<Vec<Bookmark>, StoreError>;
}
