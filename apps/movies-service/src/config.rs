//! Application configuration loaded from environment variables.

use std::env;

#[cfg(feature = "postgres")]
use reel_infra::DatabaseConfig;
use reel_infra::{JwtConfig, SwapiConfig};
use reel_web::cors::parse_origins;

#[cfg(feature = "scheduler")]
use crate::background::scheduler::SchedulerConfig;

/// Movies service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    #[cfg(feature = "postgres")]
    pub run_migrations: bool,
    /// Must match the auth service's secret and issuer.
    pub jwt: JwtConfig,
    pub swapi: SwapiConfig,
    #[cfg(feature = "scheduler")]
    pub scheduler: SchedulerConfig,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3002),
            #[cfg(feature = "postgres")]
            database: DatabaseConfig::from_env("moviesdb"),
            #[cfg(feature = "postgres")]
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            jwt: JwtConfig::from_env(),
            swapi: SwapiConfig::from_env(),
            #[cfg(feature = "scheduler")]
            scheduler: SchedulerConfig::from_env(),
            cors_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
        }
    }
}
