//! HTTP surface: the page, HTMX fragments, a small JSON API and static
//! assets.
//!
//! # Routes
//!
//! - `GET /` - full page, fresh session
//! - `POST /ui/category`, `/ui/theme`, `/ui/menu-toggle`, `/ui/navigate/{section}` - fragments
//! - `GET /api/menu`, `/api/menu/{category}`, `/health` - JSON
//! - `GET /static/*` - CSS and client script

pub mod api;
pub mod cookies;
pub mod fragments;
pub mod pages;

use std::time::Duration;

use axum::{
    Router,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::IntoResponse,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(pages::index))
        .route("/ui/category", post(fragments::select_category))
        .route("/ui/theme", post(fragments::toggle_theme))
        .route("/ui/menu-toggle", post(fragments::toggle_menu))
        .route("/ui/navigate/{section}", post(fragments::navigate))
        .route("/api/menu", get(api::menu))
        .route("/api/menu/{category}", get(api::category))
        .route("/health", get(api::health))
        .nest_service("/static", static_dir)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(move |req: Request, next: Next| {
                    async move {
                        match tokio::time::timeout(timeout, next.run(req)).await {
                            Ok(res) => res,
                            Err(_) => {
                                (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                            }
                        }
                    }
                })),
        )
        .with_state(state)
}
