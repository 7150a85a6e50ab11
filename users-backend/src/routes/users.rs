use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;

use crate::{dto::user_dto::CreateUserPayload, error::Result, models::user::User, AppState};

#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = state
        .users
        .list()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error fetching user data"))?;
    Ok(Json(users))
}

#[axum::debug_handler]
pub async fn add_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUserPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let created_at = Utc::now();
    let Json(payload) =
        payload.inspect_err(|e| tracing::error!(error = %e, "Error inserting user"))?;
    let record = state
        .users
        .insert(payload.stamped(created_at))
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error inserting user"))?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[axum::debug_handler]
pub async fn delete_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let deleted = state
        .users
        .delete_all()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error deleting users"))?;
    tracing::info!(deleted, "Deleted all users");
    Ok((StatusCode::OK, "All users deleted successfully"))
}
