#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database per call, schema applied. A single pooled
/// connection keeps the memory database alive for the pool's lifetime.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = configs::DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = models::db::connect_with(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
