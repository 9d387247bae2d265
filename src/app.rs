//! App core: wires the session tracker, bookmark store, mutation façade,
//! and realtime sync into one cooperative event loop.
//!
//! Everything runs on a single task: auth notifications, refresh
//! completions, mutation results, and realtime events are all applied
//! inline, so the bookmark collection never needs locking and every
//! transform stays order-independent.

use crate::clients::auth::AuthClient;
use crate::clients::realtime::RealtimeClient;
use crate::clients::table::BookmarkTable;
use crate::managers::bookmark_store::BookmarkStore;
use crate::managers::session_tracker::SessionTracker;
use crate::services::bookmark_service::{BookmarkService, CreateOutcome};
use crate::services::realtime_sync::RealtimeSync;
use crate::types::auth::{OAuthProvider, User};
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

/// Central application struct owning the session-scoped state and the
/// client seams.
pub struct App<A, T, R> {
    session: SessionTracker<A>,
    bookmarks: BookmarkService<T>,
    sync: RealtimeSync<R>,
    store: BookmarkStore,
}

impl<A: AuthClient, T: BookmarkTable, R: RealtimeClient> App<A, T, R> {
    /// Initializes the session tracker and, when a user is already
    /// signed in, subscribes to their change stream and performs the
    /// initial full fetch.
    pub async fn initialize(auth: A, table: T, realtime: R) -> Self {
        let session = SessionTracker::initialize(auth).await;
        let mut app = Self {
            session,
            bookmarks: BookmarkService::new(table),
            sync: RealtimeSync::new(realtime),
            store: BookmarkStore::new(),
        };
        let user = app.session.current_user().cloned();
        app.apply_user(user).await;
        app
    }

    /// The local bookmark collection, newest first.
    pub fn bookmarks(&self) -> &[Bookmark] {
        self.store.entries()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    pub async fn sign_in(&self, provider: OAuthProvider) {
        self.session.sign_in(provider).await;
    }

    pub async fn sign_out(&self) {
        self.session.sign_out().await;
    }

    /// Submits a new bookmark for the signed-in user. See
    /// [`BookmarkService::create`] for the validation and failure rules;
    /// the record appears locally only once its insert event arrives.
    pub async fn add_bookmark(&mut self, title: &str, url: &str) -> CreateOutcome {
        let user = self.session.current_user().cloned();
        self.bookmarks.create(user.as_ref(), title, url).await
    }

    /// Deletes a bookmark by identifier. On success the entry is removed
    /// locally right away; on failure the collection is untouched and
    /// the error is returned for the caller to surface.
    pub async fn delete_bookmark(&mut self, id: &str) -> Result<(), StoreError> {
        self.bookmarks.delete(id, &mut self.store).await
    }

    /// Awaits the next notification (auth change or realtime event) and
    /// applies it. Returns `false` when the auth stream has closed.
    pub async fn process_next(&mut self) -> bool {
        enum Step {
            Auth(Option<Option<User>>),
            Event(Option<crate::types::event::ChangeEvent>),
        }

        let step = tokio::select! {
            change = self.session.next_change() => Step::Auth(change),
            event = self.sync.next_event() => Step::Event(event),
        };
        match step {
            Step::Auth(Some(user)) => {
                self.apply_user(user).await;
                true
            }
            Step::Auth(None) => false,
            Step::Event(Some(event)) => {
                self.store.apply(event);
                true
            }
            Step::Event(None) => {
                // Live channel closed by the stream side; drop the dead
                // subscription so the branch pends again.
                self.sync.retarget(None);
                true
            }
        }
    }

    /// Drains all already-delivered notifications without waiting and
    /// returns how many were applied. Auth changes are applied before
    /// realtime events on every round, mirroring the teardown-first
    /// ordering of the live loop.
    pub async fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        loop {
            if let Some(user) = self.session.try_next_change() {
                self.apply_user(user).await;
                handled += 1;
                continue;
            }
            if let Some(event) = self.sync.try_next_event() {
                self.store.apply(event);
                handled += 1;
                continue;
            }
            break;
        }
        handled
    }

    /// Runs the event loop until both notification streams close.
    pub async fn run(&mut self) {
        while self.process_next().await {}
    }

    /// Applies a published-user transition: tear down or retarget the
    /// realtime subscription first (so no stale event can land in the
    /// new collection), then refresh for the new user or clear on
    /// sign-out.
    async fn apply_user(&mut self, user: Option<User>) {
        self.sync.retarget(user.as_ref());
        match user {
            Some(user) => {
                self.bookmarks
                    .refresh_into(&user.id, &mut self.store)
                    .await;
            }
            None => self.store.clear(),
        }
    }
}
