//! In-memory bookmark collection for the active session.
//!
//! Owns the ordered list of the signed-in account's bookmarks and applies
//! the three reconciliation transforms used by the realtime event path.
//! All transforms are idempotent so the direct mutation path and the
//! event path may both report the same change without corrupting state.

use crate::types::bookmark::Bookmark;
use crate::types::event::ChangeEvent;

/// The local bookmark collection, ordered by creation timestamp descending.
///
/// Exclusively owned by the active session; discarded wholesale on logout.
pub struct BookmarkStore {
    entries: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Entries in display order (newest first).
    pub fn entries(&self) -> &[Bookmark] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|b| b.id == id)
    }

    /// Replaces the entire collection with a fresh query result.
    pub fn replace_all(&mut self, rows: Vec<Bookmark>) {
        self.entries = rows;
        self.resort();
    }

    /// Discards the collection (logout path).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Applies one realtime change event.
    pub fn apply(&mut self, event: ChangeEvent) {
        match event {
            ChangeEvent::Insert(row) => self.prepend_if_absent(row),
            ChangeEvent::Update(row) => self.replace_if_present(row),
            ChangeEvent::Delete(row) => {
                self.remove_if_present(&row.id);
            }
        }
    }

    /// Adds a record at the front unless an entry with the same id is
    /// already held. The collection is re-sorted by creation timestamp
    /// afterwards, so out-of-order event delivery cannot misplace rows.
    pub fn prepend_if_absent(&mut self, row: Bookmark) {
        if self.contains(&row.id) {
            return;
        }
        self.entries.insert(0, row);
        self.resort();
    }

    /// Replaces the entry matching the record's id in place; no-op when
    /// the record is not currently held. Creation timestamps are
    /// immutable, so no re-sort is needed.
    pub fn replace_if_present(&mut self, row: Bookmark) {
        if let Some(entry) = self.entries.iter_mut().find(|b| b.id == row.id) {
            *entry = row;
        }
    }

    /// Removes the entry with the given id; no-op when already absent.
    /// Returns whether an entry was removed.
    pub fn remove_if_present(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|b| b.id != id);
        self.entries.len() != before
    }

    /// Stable sort by creation timestamp descending. RFC 3339 strings
    /// order lexicographically, and stability keeps a just-prepended row
    /// ahead of older rows sharing its timestamp.
    fn resort(&mut self) {
        self.entries
            .sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}

impl Default for BookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}
