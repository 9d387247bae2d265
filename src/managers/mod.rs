// State managers.
// Managers own session-scoped state: the published user and the bookmark collection.

pub mod bookmark_store;
pub mod session_tracker;
