use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use users_backend::{config::init_config, database::pool::create_pool, router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let config = init_config()?;

    let pool = create_pool(config);
    let app = router(AppState::new(pool));

    let addr = config.server_address();
    let listener = TcpListener::bind(addr).await?;
    info!("Server running on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
