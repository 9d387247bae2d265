//! Change-event stream client seam.

use tokio::sync::mpsc;

use crate::types::event::ChangeEvent;

/// Trait defining the change-event stream operations.
pub trait RealtimeClient {
    /// Opens a subscription to bookmark changes for rows owned by
    /// `owner_id`, covering insert, update, and delete events.
    ///
    /// The handle is returned immediately; delivery is asynchronous.
    /// Dropping the handle unsubscribes.
    fn subscribe_bookmarks(&self, owner_id: &str) -> RealtimeSubscription;
}

/// Handle to a live change-event subscription.
///
/// A lazy, infinite, non-restartable sequence of tagged change events.
/// Dropping the handle closes the channel, which is the unsubscribe
/// operation.
pub struct RealtimeSubscription {
    rx: mpsc::UnboundedReceiver<ChangeEvent>,
}

impl RealtimeSubscription {
    pub fn new(rx: mpsc::UnboundedReceiver<ChangeEvent>) -> Self {
        Self { rx }
    }

    /// Awaits the next change event.
    ///
    /// Returns `None` once the stream side has closed the channel.
    pub async fn next_event(&mut self) -> Option<ChangeEvent> {
        self.rx.recv().await
    }

    /// Returns an already-delivered event without waiting, if any.
    pub fn try_next_event(&mut self) -> Option<ChangeEvent> {
        self.rx.try_recv().ok()
    }
}
