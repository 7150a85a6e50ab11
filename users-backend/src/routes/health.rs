use axum::{http::StatusCode, response::IntoResponse};

/// Liveness probe. Never touches the database.
#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
