//! HTMX fragment handlers.
//!
//! Each handler mutates the visitor's [`ViewState`](crate::view::ViewState)
//! and returns the fragment that changed. Client-side effects (theme
//! attribute, smooth scroll) are requested through the `HX-Trigger` header.

use axum::extract::{Form, Path, State};
use axum::http::{HeaderName, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::cookies::{CookieStore, resolve_session};
use crate::AppState;
use crate::ui::{PageSections, render_menu_browser, render_navbar, render_theme_toggle};
use crate::view::{DocumentTheme, ThemeController};

/// Response header HTMX turns into client-side events.
pub const HX_TRIGGER: &str = "hx-trigger";

/// Form body for category selection.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    /// Category to activate.
    pub name: String,
}

/// POST /ui/category - select a category and re-render the menu browser.
pub async fn select_category(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CategoryForm>,
) -> impl IntoResponse {
    let (session, jar) = resolve_session(&state, jar);

    let html = session.update(|view| {
        if view.select_category(&state.catalogue, &form.name) {
            info!(
                name: "menu.category.selected",
                session_id = %session.id(),
                category = %form.name,
                "Category selected"
            );
        }
        render_menu_browser(&state.catalogue, view)
    });

    (jar, Html(html))
}

/// POST /ui/theme - flip the session's theme, persist it and ask the
/// client to re-apply `data-theme`.
///
/// The session holds the current theme; the cookie only receives the new
/// value, so a browser that drops cookies still toggles back and forth.
pub async fn toggle_theme(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (session, jar) = resolve_session(&state, jar);
    let mut document = DocumentTheme::new();

    let (theme, jar) = session.update(|view| {
        let mut controller = ThemeController::with_theme(view.theme(), CookieStore::new(jar));
        let theme = controller.toggle(&mut document);
        view.set_theme(theme);
        (theme, controller.into_store().into_jar())
    });

    info!(
        name: "theme.toggled",
        session_id = %session.id(),
        theme = %theme,
        "Theme toggled"
    );

    let applied = document.attribute().unwrap_or(theme);
    let trigger = json!({ "theme-changed": { "theme": applied } });
    with_trigger((jar, Html(render_theme_toggle(theme))).into_response(), &trigger)
}

/// POST /ui/menu-toggle - open or close the mobile menu.
pub async fn toggle_menu(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (session, jar) = resolve_session(&state, jar);
    let html = session.update(|view| {
        view.toggle_menu();
        render_navbar(&state.config.site.name, view)
    });

    (jar, Html(html))
}

/// POST /ui/navigate/{section} - close the mobile menu and ask the client
/// to scroll. Unknown sections leave everything unchanged.
pub async fn navigate(
    State(state): State<AppState>,
    Path(section): Path<String>,
    jar: CookieJar,
) -> Response {
    let (session, jar) = resolve_session(&state, jar);
    let mut sections = PageSections::new();

    let (moved, html) = session.update(|view| {
        let moved = view.navigate(&section, &mut sections);
        (moved, render_navbar(&state.config.site.name, view))
    });

    let response = (jar, Html(html)).into_response();
    match sections.scrolled_to().filter(|_| moved) {
        Some(id) => with_trigger(response, &json!({ "scroll-to-section": { "id": id } })),
        None => response,
    }
}

fn with_trigger(mut response: Response, trigger: &serde_json::Value) -> Response {
    match HeaderValue::try_from(trigger.to_string()) {
        Ok(value) => {
            response
                .headers_mut()
                .insert(HeaderName::from_static(HX_TRIGGER), value);
        }
        Err(e) => warn!(error = %e, "Dropping unencodable HX-Trigger header"),
    }
    response
}
