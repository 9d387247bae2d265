//! Identity provider client seam.
//!
//! Covers the four operations the session tracker needs: the one-time
//! current-user query, the continuous auth-state-change stream, and the
//! sign-in/sign-out actions.

use tokio::sync::mpsc;

use crate::types::auth::{OAuthProvider, User};
use crate::types::errors::AuthError;

/// Trait defining the identity provider operations.
///
/// All calls are asynchronous and non-blocking; implementations must not
/// block the calling task beyond awaiting their own I/O.
pub trait AuthClient {
    /// Queries the currently signed-in user, if any.
    async fn current_user(&self) -> Result<Option<User>, AuthError>;

    /// Subscribes to authentication-state changes.
    ///
    /// Each notification carries the signed-in user, or `None` on sign-out.
    /// Dropping the returned subscription unsubscribes.
    fn on_auth_state_change(&self) -> AuthSubscription;

    /// Begins an OAuth sign-in redirect with the given provider.
    async fn sign_in_with_oauth(&self, provider: OAuthProvider) -> Result<(), AuthError>;

    /// Terminates the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Handle to an auth-state-change subscription.
///
/// Wraps the notification channel; dropping the handle closes the channel,
/// which is the unsubscribe operation.
pub struct AuthSubscription {
    rx: mpsc::UnboundedReceiver<Option<User>>,
}

impl AuthSubscription {
    pub fn new(rx: mpsc::UnboundedReceiver<Option<User>>) -> Self {
        Self { rx }
    }

    /// Awaits the next auth-state notification.
    ///
    /// Returns `None` once the provider side has closed the stream.
    pub async fn changed(&mut self) -> Option<Option<User>> {
        self.rx.recv().await
    }

    /// Returns an already-delivered notification without waiting, if any.
    pub fn try_changed(&mut self) -> Option<Option<User>> {
        self.rx.try_recv().ok()
    }
}
