use serde::{Deserialize, Serialize};

use crate::types::bookmark::Bookmark;

/// A change notification pushed by the backend for one bookmark row.
///
/// Delete carries the old row so the local collection can be matched by
/// identifier even though the record no longer exists remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeEvent {
    Insert(Bookmark),
    Update(Bookmark),
    Delete(Bookmark),
}

impl ChangeEvent {
    /// Identifier of the affected row.
    pub fn record_id(&self) -> &str {
        match self {
            ChangeEvent::Insert(b) | ChangeEvent::Update(b) | ChangeEvent::Delete(b) => &b.id,
        }
    }

    /// Owner of the affected row, used for subscription scoping.
    pub fn owner_id(&self) -> &str {
        match self {
            ChangeEvent::Insert(b) | ChangeEvent::Update(b) | ChangeEvent::Delete(b) => &b.user_id,
        }
    }
}
