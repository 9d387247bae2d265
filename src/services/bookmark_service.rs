//! Mutation façade over the bookmarks table.
//!
//! Issues create/delete/refresh requests against the data store seam and
//! reconciles the local [`BookmarkStore`] with the results. Created rows
//! are never inserted locally from this path — they arrive exclusively
//! through the realtime insert event, so reacting to both would
//! double-insert.

use crate::clients::table::BookmarkTable;
use crate::managers::bookmark_store::BookmarkStore;
use crate::types::auth::User;
use crate::types::bookmark::NewBookmark;
use crate::types::errors::StoreError;

/// Result of a create submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The insert request was sent and accepted.
    Submitted,
    /// Validation no-op: empty title, empty url, or no signed-in user.
    /// No request was issued.
    Rejected,
    /// The insert request failed. The error has been logged; no local
    /// state changed.
    Failed,
}

/// Façade issuing bookmark mutations against the data store.
pub struct BookmarkService<T> {
    table: T,
}

impl<T: BookmarkTable> BookmarkService<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    /// Fetches all bookmarks owned by `owner_id` (newest first) and
    /// replaces the store's collection wholesale.
    ///
    /// A failed query yields an empty collection, indistinguishable from
    /// zero results; the failure is logged.
    pub async fn refresh_into(&self, owner_id: &str, store: &mut BookmarkStore) {
        match self.table.select_by_owner(owner_id).await {
            Ok(rows) => store.replace_all(rows),
            Err(e) => {
                log::warn!("Bookmark refresh for {} failed: {}", owner_id, e);
                store.replace_all(Vec::new());
            }
        }
    }

    /// Submits a new bookmark owned by `user`.
    ///
    /// Empty title, empty url, or an absent user is a validation no-op.
    /// On success nothing is inserted locally: the record reaches the
    /// store through the realtime insert event.
    pub async fn create(&self, user: Option<&User>, title: &str, url: &str) -> CreateOutcome {
        let Some(user) = user else {
            return CreateOutcome::Rejected;
        };
        if title.is_empty() || url.is_empty() {
            return CreateOutcome::Rejected;
        }

        let row = NewBookmark {
            title: title.to_string(),
            url: url.to_string(),
            user_id: user.id.clone(),
        };
        match self.table.insert(row).await {
            Ok(()) => CreateOutcome::Submitted,
            Err(e) => {
                log::warn!("Bookmark insert failed: {}", e);
                CreateOutcome::Failed
            }
        }
    }

    /// Deletes the bookmark with the given identifier.
    ///
    /// On success the matching entry is removed from the store
    /// immediately, without waiting for the realtime delete event; the
    /// later event is an idempotent no-op. On failure the store is left
    /// untouched and the error is returned for the caller to surface.
    pub async fn delete(&self, id: &str, store: &mut BookmarkStore) -> Result<(), StoreError> {
        let deleted = self.table.delete_by_id(id).await?;
        for row in &deleted {
            store.remove_if_present(&row.id);
        }
        Ok(())
    }
}
