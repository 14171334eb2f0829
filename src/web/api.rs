//! JSON API over the catalogue.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::AppState;
use crate::catalogue::MenuCatalogue;
use crate::view::VisibleItem;

/// Errors returned by the JSON API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No category with this name.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UnknownCategory(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// One category with display-ready prices.
#[derive(Debug, Serialize)]
pub struct CategoryResponse<'a> {
    pub category: &'a str,
    pub items: Vec<VisibleItem<'a>>,
}

/// GET /api/menu - the whole catalogue in its data file shape.
pub async fn menu(State(state): State<AppState>) -> Json<MenuCatalogue> {
    Json(state.catalogue.as_ref().clone())
}

/// GET /api/menu/{category} - a single category.
pub async fn category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let category = state
        .catalogue
        .category(&name)
        .ok_or_else(|| ApiError::UnknownCategory(name.clone()))?;

    let body = CategoryResponse {
        category: &category.name,
        items: category.items.iter().map(VisibleItem::from).collect(),
    };
    Ok(Json(body).into_response())
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "categories": state.catalogue.len(),
        "sessions": state.sessions.len(),
    }))
}
