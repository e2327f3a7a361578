use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::errors::AppError;
use crate::services::composer;
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if expected_token.is_empty() || token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/endpoints
pub async fn get_endpoints(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<BTreeMap<String, String>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;
    Ok(Json(state.links.endpoints()))
}

// POST /api/admin/endpoints
pub async fn update_endpoints(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(partial): Json<HashMap<String, String>>,
) -> Result<Json<BTreeMap<String, String>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    for endpoint in partial.values() {
        composer::validate_endpoint(endpoint).map_err(|e| AppError::BadRequest(e.to_string()))?;
    }

    tracing::info!(count = partial.len(), "admin endpoint update");
    state.links.update_endpoints(partial);

    Ok(Json(state.links.endpoints()))
}
