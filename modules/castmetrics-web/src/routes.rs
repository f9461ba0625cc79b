use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use castmetrics_common::{ApiEnvelope, ApiError};
use castmetrics_core::{discover, stats};

use crate::AppState;

// --- Query structs ---

#[derive(Deserialize)]
pub struct DiscoveryQuery {
    fid: Option<u64>,
}

// --- Helpers ---

/// Convert a service result into the shared envelope with the status-code
/// mapping from the error taxonomy. Failures are logged here, once, at the
/// boundary.
fn envelope<T: Serialize>(result: Result<T, ApiError>) -> Response {
    match result {
        Ok(data) => (StatusCode::OK, Json(ApiEnvelope::ok(data))).into_response(),
        Err(err) => {
            warn!(error = %err, "Request failed");
            let status = StatusCode::from_u16(err.status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(ApiEnvelope::<T>::err(err.to_string()))).into_response()
        }
    }
}

// --- Handlers ---

pub async fn user_stats(State(state): State<Arc<AppState>>, Path(fid): Path<u64>) -> Response {
    let result = match state.client.as_ref() {
        Some(client) => stats::user_by_fid(client, fid).await,
        None => Err(ApiError::ConfigMissing),
    };
    envelope(result)
}

pub async fn user_stats_by_username(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Response {
    let result = match state.client.as_ref() {
        Some(client) => stats::user_by_username(client, &username).await,
        None => Err(ApiError::ConfigMissing),
    };
    envelope(result)
}

pub async fn leaderboard(State(state): State<Arc<AppState>>) -> Response {
    let result = match state.client.as_ref() {
        Some(client) => stats::leaderboard(client).await,
        None => Err(ApiError::ConfigMissing),
    };
    envelope(result)
}

pub async fn discovery(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DiscoveryQuery>,
) -> Response {
    let result = match state.client.as_ref() {
        Some(client) => discover(client, params.fid).await,
        None => Err(ApiError::ConfigMissing),
    };
    envelope(result)
}

/// Liveness probe. Not enveloped: this is infrastructure, not business data.
pub async fn health() -> Response {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
    .into_response()
}
