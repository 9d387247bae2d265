// Trait seams for the three external collaborators: identity provider,
// relational data store, and change-event stream. The hosted service
// implements these for real deployments; `backend::MemoryBackend`
// implements them in-process for tests and the demo.

pub mod auth;
pub mod realtime;
pub mod table;

pub use auth::{AuthClient, AuthSubscription};
pub use realtime::{RealtimeClient, RealtimeSubscription};
pub use table::BookmarkTable;
