use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::repositories::TokenRepository;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(token_repo): State<Arc<dyn TokenRepository>>) -> impl IntoResponse {
    if token_repo.health_check().await {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "token_store": "connected"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "token_store": "disconnected"
            })),
        )
    }
}
