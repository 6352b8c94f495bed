use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::connect_with_config;


/// Policy upsert and document round-trip tests
pub mod policy_tests;




/// Fresh in-memory database with every migration applied. A single pooled
/// connection keeps all statements on the same in-memory database.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut cfg = DatabaseConfig::with_url("sqlite::memory:");
    cfg.max_connections = 1;
    cfg.min_connections = 1;
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
