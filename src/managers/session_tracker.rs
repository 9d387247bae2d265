//! Session tracker.
//!
//! Observes the identity provider and publishes the current signed-in
//! user (or none). After initialization the auth-state-change stream is
//! the sole source of truth, superseding the one-time initial query.

use crate::clients::auth::{AuthClient, AuthSubscription};
use crate::types::auth::{OAuthProvider, User};

/// Tracks the signed-in user for the lifetime of the session.
///
/// Dropping the tracker drops the auth-change subscription, so nothing
/// leaks past the component's lifetime.
pub struct SessionTracker<A> {
    client: A,
    subscription: AuthSubscription,
    current: Option<User>,
}

impl<A: AuthClient> SessionTracker<A> {
    /// Queries the provider for the current user and starts observing
    /// auth-state changes.
    ///
    /// The subscription is opened before the one-time query so a change
    /// racing initialization is never lost. A failed initial query is
    /// non-fatal: the tracker starts signed out and logs a warning.
    pub async fn initialize(client: A) -> Self {
        let subscription = client.on_auth_state_change();
        let current = match client.current_user().await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("Initial user query failed: {}", e);
                None
            }
        };
        Self {
            client,
            subscription,
            current,
        }
    }

    /// The currently published user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Awaits the next auth-state notification and republishes it.
    ///
    /// Returns the newly published state, or `None` once the provider
    /// has closed the stream.
    pub async fn next_change(&mut self) -> Option<Option<User>> {
        let user = self.subscription.changed().await?;
        self.current = user.clone();
        Some(user)
    }

    /// Republishes an already-delivered notification without waiting.
    pub fn try_next_change(&mut self) -> Option<Option<User>> {
        let user = self.subscription.try_changed()?;
        self.current = user.clone();
        Some(user)
    }

    /// Begins an OAuth sign-in redirect. Fire and forget: a failure is
    /// logged and the published state is left unchanged.
    pub async fn sign_in(&self, provider: OAuthProvider) {
        if let Err(e) = self.client.sign_in_with_oauth(provider).await {
            log::warn!("OAuth sign-in with {} failed: {}", provider.as_str(), e);
        }
    }

    /// Terminates the session. Fire and forget, like [`Self::sign_in`];
    /// the signed-out state arrives through the notification stream.
    pub async fn sign_out(&self) {
        if let Err(e) = self.client.sign_out().await {
            log::warn!("Sign-out failed: {}", e);
        }
    }
}
