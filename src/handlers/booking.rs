use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::errors::{AppError, LinkError};
use crate::services::booking::IntentSummary;
use crate::state::AppState;

// GET /book/:intent
//
// Same-tab navigation over HTTP: the landing page links here and the browser
// follows the redirect to the scheduling page.
pub async fn book(
    State(state): State<Arc<AppState>>,
    Path(intent): Path<String>,
) -> Result<Response, AppError> {
    let url = state.links.link_for(&intent)?;
    let location = HeaderValue::try_from(url.as_str()).map_err(|e| LinkError::MalformedEndpoint {
        endpoint: url.clone(),
        reason: e.to_string(),
    })?;

    tracing::info!(%intent, %url, "redirecting to scheduling page");
    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}

// GET /api/intents
pub async fn list_intents(State(state): State<Arc<AppState>>) -> Json<Vec<IntentSummary>> {
    Json(state.links.intents())
}

// GET /api/links/:intent
#[derive(Serialize)]
pub struct LinkResponse {
    intent: String,
    url: String,
}

pub async fn get_link(
    State(state): State<Arc<AppState>>,
    Path(intent): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let url = state.links.link_for(&intent)?;
    Ok(Json(LinkResponse { intent, url }))
}
