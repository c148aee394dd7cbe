use crate::db;

fn memory_config() -> configs::DatabaseConfig {
    configs::DatabaseConfig {
        url: "sqlite::memory:".into(),
        // a single pooled handle keeps the in-memory database alive
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    }
}

#[tokio::test]
async fn connect_with_memory_database() -> anyhow::Result<()> {
    let db = db::connect_with(&memory_config()).await?;
    db.ping().await?;
    Ok(())
}

#[tokio::test]
async fn migrations_are_idempotent() -> anyhow::Result<()> {
    use migration::MigratorTrait;
    let db = db::connect_with(&memory_config()).await?;
    migration::Migrator::up(&db, None).await?;
    // second run must be a no-op, not a failure
    migration::Migrator::up(&db, None).await?;
    Ok(())
}
