//! Migration CLI tool.
//!
//! `MIGRATION_TARGET=auth|movies` selects the migrator; `DATABASE_URL` points
//! at that service's database.

use migration::{AuthMigrator, MoviesMigrator};
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    let target = std::env::var("MIGRATION_TARGET").unwrap_or_else(|_| "auth".to_string());
    match target.as_str() {
        "movies" => cli::run_cli(MoviesMigrator).await,
        "auth" => cli::run_cli(AuthMigrator).await,
        other => {
            tracing::error!("Unknown MIGRATION_TARGET '{}', expected 'auth' or 'movies'", other);
            std::process::exit(2);
        }
    }
}
