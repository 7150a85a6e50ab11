use axum::{extract::State, response::Html};

use crate::{error::Result, AppState};

/// Fetches the user list from the backend and renders it as an HTML table.
#[axum::debug_handler]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let users = state
        .backend
        .fetch_users()
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, url = state.backend.users_url(), "Error fetching user data")
        })?;
    let page = state
        .page
        .render(&users)
        .inspect_err(|e| tracing::error!(error = %e, "Error rendering users page"))?;
    Ok(Html(page))
}
