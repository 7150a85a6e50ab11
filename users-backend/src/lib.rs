pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::services::user_service::{PgUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self::with_store(Arc::new(PgUserStore::new(pool)))
    }

    pub fn with_store(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/users", get(routes::users::list_users))
        .route("/api/add-users", post(routes::users::add_user))
        .route("/api/delete-users", delete(routes::users::delete_users))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
