pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{error::Result, render::UsersPage, services::backend_client::BackendClient};

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub page: Arc<UsersPage>,
}

impl AppState {
    pub fn new(backend_api_url: String) -> Result<Self> {
        Ok(Self {
            backend: BackendClient::new(backend_api_url)?,
            page: Arc::new(UsersPage::new()?),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index::index))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
