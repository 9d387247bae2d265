//! In-process hosted-backend emulation.
//!
//! One shared state implements all three client seams: an auth session
//! with change notifications, a SQLite-backed bookmarks table, and a
//! change-event fan-out scoped per owner. Inserts and deletes emit the
//! same events the hosted service's CDC stream would, so the full
//! create-via-event and delete-redundancy flows run end to end without
//! a network.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rusqlite::params;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::clients::auth::{AuthClient, AuthSubscription};
use crate::clients::realtime::{RealtimeClient, RealtimeSubscription};
use crate::clients::table::BookmarkTable;
use crate::types::auth::{OAuthProvider, User};
use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::errors::{AuthError, StoreError};
use crate::types::event::ChangeEvent;

/// One-shot failure injection points for the error-path tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    CurrentUser,
    SignIn,
    SignOut,
    Select,
    Insert,
    Delete,
}

struct RealtimeFanout {
    owner_id: String,
    tx: mpsc::UnboundedSender<ChangeEvent>,
}

struct Inner {
    db: crate::database::Database,
    session: Option<User>,
    auth_subscribers: Vec<mpsc::UnboundedSender<Option<User>>>,
    realtime_subscribers: Vec<RealtimeFanout>,
    faults: Vec<Fault>,
}

/// Cloneable handle to the emulated backend. All clones share state.
#[derive(Clone)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBackend {
    pub fn new() -> Result<Self, rusqlite::Error> {
        let db = crate::database::Database::open_in_memory()?;
        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                db,
                session: None,
                auth_subscribers: Vec::new(),
                realtime_subscribers: Vec::new(),
                faults: Vec::new(),
            })),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Arms a one-shot fault: the next matching operation fails once.
    pub fn inject_fault(&self, fault: Fault) {
        self.lock().faults.push(fault);
    }

    /// Replaces the auth session and notifies auth subscribers.
    pub fn set_session(&self, user: Option<User>) {
        let mut inner = self.lock();
        inner.session = user.clone();
        inner
            .auth_subscribers
            .retain(|tx| tx.send(user.clone()).is_ok());
    }

    /// Applies an external edit to a row, as another open session or a
    /// direct table edit would, and emits an update event. Returns the
    /// updated row, or `None` for an unknown identifier.
    pub fn update(&self, id: &str, title: &str, url: &str) -> Result<Option<Bookmark>, StoreError> {
        let mut inner = self.lock();
        let affected = inner
            .db
            .connection()
            .execute(
                "UPDATE bookmarks SET title = ?1, url = ?2 WHERE id = ?3",
                params![title, url, id],
            )
            .map_err(|e| StoreError::Query(e.to_string()))?;
        if affected == 0 {
            return Ok(None);
        }
        let row = Self::fetch_row(&inner, id)?;
        if let Some(row) = &row {
            Self::fan_out(&mut inner, ChangeEvent::Update(row.clone()));
        }
        Ok(row)
    }

    /// Inserts a pre-existing row with a chosen timestamp, without
    /// emitting an event. For seeding fixtures that predate the session.
    pub fn seed(
        &self,
        owner_id: &str,
        title: &str,
        url: &str,
        created_at: &str,
    ) -> Result<Bookmark, StoreError> {
        let inner = self.lock();
        let row = Bookmark {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            url: url.to_string(),
            user_id: owner_id.to_string(),
            created_at: created_at.to_string(),
        };
        inner
            .db
            .connection()
            .execute(
                "INSERT INTO bookmarks (id, title, url, user_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![row.id, row.title, row.url, row.user_id, row.created_at],
            )
            .map_err(|e| StoreError::Insert(e.to_string()))?;
        Ok(row)
    }

    /// All rows for an owner straight from the table, newest first.
    /// The model oracle for the consistency tests.
    pub fn rows_for_owner(&self, owner_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        let inner = self.lock();
        Self::select_rows(&inner, owner_id)
    }

    fn take_fault(inner: &mut Inner, fault: Fault) -> bool {
        if let Some(pos) = inner.faults.iter().position(|f| *f == fault) {
            inner.faults.remove(pos);
            return true;
        }
        false
    }

    fn fan_out(inner: &mut Inner, event: ChangeEvent) {
        let owner = event.owner_id().to_string();
        inner
            .realtime_subscribers
            .retain(|sub| sub.owner_id != owner || sub.tx.send(event.clone()).is_ok());
    }

    fn now_rfc3339() -> Result<String, StoreError> {
        OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|e| StoreError::Insert(e.to_string()))
    }

    fn row_from_sql(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: row.get(0)?,
            title: row.get(1)?,
            url: row.get(2)?,
            user_id: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn fetch_row(inner: &Inner, id: &str) -> Result<Option<Bookmark>, StoreError> {
        let result = inner.db.connection().query_row(
            "SELECT id, title, url, user_id, created_at FROM bookmarks WHERE id = ?1",
            params![id],
            Self::row_from_sql,
        );
        match result {
            Ok(row) => Ok(Some(row)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Query(e.to_string())),
        }
    }

    fn select_rows(inner: &Inner, owner_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        let conn = inner.db.connection();
        let mut stmt = conn
            .prepare(
                "SELECT id, title, url, user_id, created_at FROM bookmarks \
                 WHERE user_id = ?1 ORDER BY created_at DESC, rowid DESC",
            )
            .map_err(|e| StoreError::Query(e.to_string()))?;
        let rows = stmt
            .query_map(params![owner_id], Self::row_from_sql)
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| StoreError::Query(e.to_string()))?);
        }
        Ok(results)
    }
}

impl AuthClient for MemoryBackend {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        let mut inner = self.lock();
        if Self::take_fault(&mut inner, Fault::CurrentUser) {
            return Err(AuthError::Provider("injected current_user fault".into()));
        }
        Ok(inner.session.clone())
    }

    fn on_auth_state_change(&self) -> AuthSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock().auth_subscribers.push(tx);
        AuthSubscription::new(rx)
    }

    /// Emulates the full OAuth redirect round trip by resolving to a
    /// deterministic per-provider account and signing it in.
    async fn sign_in_with_oauth(&self, provider: OAuthProvider) -> Result<(), AuthError> {
        let user = {
            let mut inner = self.lock();
            if Self::take_fault(&mut inner, Fault::SignIn) {
                return Err(AuthError::Provider("injected sign-in fault".into()));
            }
            User::new(format!("{}-user", provider.as_str()))
        };
        self.set_session(Some(user));
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        {
            let mut inner = self.lock();
            if Self::take_fault(&mut inner, Fault::SignOut) {
                return Err(AuthError::Provider("injected sign-out fault".into()));
            }
        }
        self.set_session(None);
        Ok(())
    }
}

impl BookmarkTable for MemoryBackend {
    async fn select_by_owner(&self, owner_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        let mut inner = self.lock();
        if Self::take_fault(&mut inner, Fault::Select) {
            return Err(StoreError::Query("injected select fault".into()));
        }
        Self::select_rows(&inner, owner_id)
    }

    async fn insert(&self, row: NewBookmark) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if Self::take_fault(&mut inner, Fault::Insert) {
            return Err(StoreError::Insert("injected insert fault".into()));
        }
        let record = Bookmark {
            id: Uuid::new_v4().to_string(),
            title: row.title,
            url: row.url,
            user_id: row.user_id,
            created_at: Self::now_rfc3339()?,
        };
        inner
            .db
            .connection()
            .execute(
                "INSERT INTO bookmarks (id, title, url, user_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![record.id, record.title, record.url, record.user_id, record.created_at],
            )
            .map_err(|e| StoreError::Insert(e.to_string()))?;
        Self::fan_out(&mut inner, ChangeEvent::Insert(record));
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<Vec<Bookmark>, StoreError> {
        let mut inner = self.lock();
        if Self::take_fault(&mut inner, Fault::Delete) {
            return Err(StoreError::Delete("injected delete fault".into()));
        }
        let deleted = match Self::fetch_row(&inner, id)? {
            Some(row) => vec![row],
            None => Vec::new(),
        };
        inner
            .db
            .connection()
            .execute("DELETE FROM bookmarks WHERE id = ?1", params![id])
            .map_err(|e| StoreError::Delete(e.to_string()))?;
        for row in &deleted {
            Self::fan_out(&mut inner, ChangeEvent::Delete(row.clone()));
        }
        Ok(deleted)
    }
}

impl RealtimeClient for MemoryBackend {
    fn subscribe_bookmarks(&self, owner_id: &str) -> RealtimeSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock().realtime_subscribers.push(RealtimeFanout {
            owner_id: owner_id.to_string(),
            tx,
        });
        RealtimeSubscription::new(rx)
    }
}
