//! Realtime subscription lifecycle.
//!
//! Keeps exactly one change-event subscription alive while a user is
//! signed in, scoped to that user's rows. The subscription is torn down
//! whenever the signed-in user changes or becomes absent, preventing
//! cross-account event leakage and duplicate subscriptions.

use crate::clients::realtime::{RealtimeClient, RealtimeSubscription};
use crate::types::auth::User;
use crate::types::event::ChangeEvent;

struct ActiveSubscription {
    owner_id: String,
    handle: RealtimeSubscription,
}

/// Owns the live change-event subscription for the signed-in user.
pub struct RealtimeSync<R> {
    client: R,
    active: Option<ActiveSubscription>,
}

impl<R: RealtimeClient> RealtimeSync<R> {
    pub fn new(client: R) -> Self {
        Self {
            client,
            active: None,
        }
    }

    /// Whether a subscription is currently live.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Whether the live subscription is scoped to `owner_id`.
    pub fn is_active_for(&self, owner_id: &str) -> bool {
        self.active
            .as_ref()
            .is_some_and(|a| a.owner_id == owner_id)
    }

    /// Points the subscription at the given user.
    ///
    /// A retarget to the already-subscribed owner keeps the existing
    /// subscription (no duplicate). Any other transition drops the old
    /// handle first — unsubscribing and discarding undelivered events —
    /// and only then subscribes for the new owner.
    pub fn retarget(&mut self, user: Option<&User>) {
        match user {
            Some(user) => {
                if self.is_active_for(&user.id) {
                    return;
                }
                self.active = None;
                self.active = Some(ActiveSubscription {
                    owner_id: user.id.clone(),
                    handle: self.client.subscribe_bookmarks(&user.id),
                });
            }
            None => {
                self.active = None;
            }
        }
    }

    /// Awaits the next change event from the live subscription.
    ///
    /// Pends forever while no subscription is active, so this can sit in
    /// a `select!` alongside the auth stream. Returns `None` when the
    /// stream side closes the live subscription's channel.
    pub async fn next_event(&mut self) -> Option<ChangeEvent> {
        match &mut self.active {
            Some(active) => active.handle.next_event().await,
            None => std::future::pending().await,
        }
    }

    /// Returns an already-delivered event without waiting, if any.
    pub fn try_next_event(&mut self) -> Option<ChangeEvent> {
        self.active.as_mut()?.handle.try_next_event()
    }
}
