use std::env;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Connection settings for a service database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    /// Load from environment variables.
    ///
    /// `DATABASE_URL` wins; otherwise the URL is composed from `DB_HOST`,
    /// `DB_PORT`, `DB_USER`, `DB_PASSWORD` and `DB_NAME` when `DB_HOST` is set.
    /// Returns `None` when neither is present.
    pub fn from_env(default_db_name: &str) -> Option<Self> {
        let url = env::var("DATABASE_URL")
            .ok()
            .filter(|u| !u.is_empty())
            .or_else(|| Self::url_from_parts(default_db_name))?;

        Some(Self {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
            sqlx_logging: env::var("DB_LOGGING")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }

    fn url_from_parts(default_db_name: &str) -> Option<String> {
        let host = env::var("DB_HOST").ok()?;
        let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
        let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
        let password = env::var("DB_PASSWORD").unwrap_or_default();
        let name = env::var("DB_NAME").unwrap_or_else(|_| default_db_name.to_string());

        Some(format!("postgres://{user}:{password}@{host}:{port}/{name}"))
    }
}

/// Open the connection pool.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(config.sqlx_logging)
        .to_owned();

    let conn = Database::connect(opts).await?;
    tracing::info!(pool = config.max_connections, "Database connected");
    Ok(conn)
}
