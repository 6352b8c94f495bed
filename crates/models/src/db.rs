use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::errors::StoreError;

/// Open a pool against `url` with sea-orm's default pool settings.
pub async fn connect(url: &str) -> Result<DatabaseConnection, StoreError> {
    connect_with_config(&DatabaseConfig::with_url(url)).await
}

/// Open a pool sized and timed by `config`. The handle is owned by the caller;
/// there is no process-wide connection.
pub async fn connect_with_config(config: &DatabaseConfig) -> Result<DatabaseConnection, StoreError> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options)
        .await
        .map_err(|e| StoreError::ConnectionFailure(e.to_string()))?;
    info!(
        backend = ?db.get_database_backend(),
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "database pool established"
    );
    Ok(db)
}

/// Round-trip to the engine to check the pool is usable.
pub async fn ping(db: &DatabaseConnection) -> Result<(), StoreError> {
    db.ping().await.map_err(|e| StoreError::ConnectionFailure(e.to_string()))
}
