//! Cookie-backed preference storage and session cookies.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;

use crate::AppState;
use crate::session::{SESSION_COOKIE, Session};
use crate::view::{PreferenceStore, StorageError, Theme, ThemeController, ViewState};

/// Browser cookies as durable key-value storage.
///
/// Writes land in the jar and reach the browser when the jar is returned
/// as part of the response.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    jar: CookieJar,
}

impl CookieStore {
    #[must_use]
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    /// The jar including any cookies written through this store.
    #[must_use]
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl PreferenceStore for CookieStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.jar.get(key).map(|c| c.value().to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let cookie = Cookie::build((key.to_string(), value.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .permanent();
        self.jar = self.jar.clone().add(cookie);
        Ok(())
    }
}

/// Theme persisted in the visitor's cookies, dark when absent.
#[must_use]
pub fn stored_theme(jar: &CookieJar) -> Theme {
    ThemeController::load(CookieStore::new(jar.clone())).theme()
}

fn session_cookie(id: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(true)
        .build()
}

/// Start a fresh session for a full page load, replacing any previous one.
pub fn start_session(state: &AppState, jar: CookieJar, theme: Theme) -> (Session, CookieJar) {
    if let Some(previous) = jar.get(SESSION_COOKIE) {
        state.sessions.remove(previous.value());
    }

    let session = state
        .sessions
        .create(ViewState::new(&state.catalogue, theme));
    let jar = jar.add(session_cookie(session.id()));
    (session, jar)
}

/// The visitor's session, or a fresh one when the cookie is missing or the
/// session has expired.
pub fn resolve_session(state: &AppState, jar: CookieJar) -> (Session, CookieJar) {
    if let Some(session) = jar
        .get(SESSION_COOKIE)
        .and_then(|c| state.sessions.get(c.value()))
    {
        return (session, jar);
    }

    debug!("No live session for fragment request, starting one");
    let theme = stored_theme(&jar);
    start_session(state, jar, theme)
}
