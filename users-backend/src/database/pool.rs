use crate::config::Config;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Connections are opened on first checkout, so the service starts (and
/// answers `/health`) while the database is still unreachable.
pub fn create_pool(config: &Config) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect_lazy_with(config.connect_options())
}
