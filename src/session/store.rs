//! Session and session store.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::view::ViewState;

/// Cookie carrying the session ID.
pub const SESSION_COOKIE: &str = "rasoi_session";

/// A single visitor session.
///
/// Cheap to clone; clones share the same state.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    /// Unique session identifier.
    id: String,
    /// The visitor's view state.
    view: RwLock<ViewState>,
    /// Last activity time.
    last_activity: RwLock<DateTime<Utc>>,
}

impl Session {
    fn new(id: String, view: ViewState) -> Self {
        let now = Utc::now();
        Self {
            inner: Arc::new(SessionInner {
                id,
                view: RwLock::new(view),
                last_activity: RwLock::new(now),
            }),
        }
    }

    /// Get the session ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Read the view state.
    pub fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        let guard = self
            .inner
            .view
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Mutate the view state and mark the session active.
    pub fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let result = {
            let mut guard = self
                .inner
                .view
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            f(&mut guard)
        };
        self.touch();
        result
    }

    /// Copy of the current view state.
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.read(Clone::clone)
    }

    /// Update the last activity timestamp.
    fn touch(&self) {
        let mut guard = self
            .inner
            .last_activity
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Utc::now();
    }

    /// Check if the session has been idle longer than `timeout`.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        let last = self.last_activity();
        // A negative span means clock skew; treat the session as live.
        (Utc::now() - last)
            .to_std()
            .is_ok_and(|idle| idle > timeout)
    }

    fn last_activity(&self) -> DateTime<Utc> {
        *self
            .inner
            .last_activity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Thread-safe store for sessions.
///
/// Optionally bounded: at capacity, creating a session evicts the least
/// recently active one.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

#[derive(Debug, Default)]
struct SessionStoreInner {
    sessions: RwLock<HashMap<String, Session>>,
    max_sessions: Option<usize>,
}

impl SessionStore {
    /// Create an unbounded session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding at most `max_sessions` sessions (at least one).
    #[must_use]
    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                sessions: RwLock::default(),
                max_sessions: Some(max_sessions.max(1)),
            }),
        }
    }

    /// Create a session with a fresh ID.
    pub fn create(&self, view: ViewState) -> Session {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone(), view);

        let mut sessions = self
            .inner
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(max) = self.inner.max_sessions {
            while sessions.len() >= max {
                let Some(oldest) = sessions
                    .iter()
                    .min_by_key(|(_, s)| s.last_activity())
                    .map(|(id, _)| id.clone())
                else {
                    break;
                };
                sessions.remove(&oldest);
                debug!(
                    name: "session.evicted",
                    session_id = %oldest,
                    max,
                    "Session store full, evicted least recently active"
                );
            }
        }

        sessions.insert(id, session.clone());
        session
    }

    /// Get a session by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Session> {
        self.inner
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Remove a session by ID.
    pub fn remove(&self, id: &str) -> Option<Session> {
        self.inner
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    /// Get the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if there are no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove sessions that have been inactive longer than the timeout.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self
            .inner
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = guard.len();
        guard.retain(|_, session| !session.is_expired_with_timeout(timeout));
        before - guard.len()
    }

    /// Periodically drop idle sessions on the tokio runtime.
    pub fn spawn_sweeper(&self, every: Duration, idle_timeout: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = store.cleanup_expired_with_timeout(idle_timeout);
                if removed > 0 {
                    info!(
                        name: "session.swept",
                        removed,
                        remaining = store.len(),
                        "Expired sessions removed"
                    );
                }
            }
        })
    }
}
