use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use users_frontend::{config::init_config, router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let config = init_config()?;

    let app = router(AppState::new(config.backend_api_url.clone())?);

    let addr = config.server_address();
    let listener = TcpListener::bind(addr).await?;
    info!("Front-end server running on port {}", addr.port());
    axum::serve(listener, app).await?;

    Ok(())
}
