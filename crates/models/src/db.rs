use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::time::Duration;

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://catalogo.db?mode=rwc".to_string())
});

/// Open the pool using `config.toml` when available, else env/defaults.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    match configs::load_default() {
        Ok(mut cfg) => {
            cfg.database.normalize_from_env();
            cfg.database.validate()?;
            connect_with(&cfg.database).await
        }
        Err(_) => {
            let cfg = configs::DatabaseConfig { url: DATABASE_URL.clone(), ..Default::default() };
            connect_with(&cfg).await
        }
    }
}

/// Open a pool for an explicit database configuration.
pub async fn connect_with(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    Ok(db)
}
