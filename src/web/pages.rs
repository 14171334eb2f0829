//! Full page handler.

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use chrono::{Datelike, Utc};
use tracing::info;

use super::cookies::{CookieStore, start_session};
use crate::AppState;
use crate::ui::{PageContext, render_page};
use crate::view::{DocumentTheme, ThemeController};

/// GET / - render the page for a fresh session.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let controller = ThemeController::load(CookieStore::new(jar));
    let mut document = DocumentTheme::new();
    controller.apply(&mut document);
    let theme = controller.theme();
    let jar = controller.into_store().into_jar();

    let (session, jar) = start_session(&state, jar, theme);
    let view = session.snapshot();

    let html = render_page(&PageContext {
        site: &state.config.site,
        links: &state.links,
        catalogue: &state.catalogue,
        view: &view,
        document_theme: document.attribute().unwrap_or(theme),
        year: Utc::now().year(),
    });

    info!(
        name: "page.rendered",
        session_id = %session.id(),
        theme = %theme,
        category = ?view.active_category(),
        "Page rendered"
    );

    (jar, Html(html))
}
