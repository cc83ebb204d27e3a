//! # Reel Auth Service
//!
//! Signup and login over HTTP; login issues the JWT the movies service accepts.

use actix_web::{App, HttpServer};
use tracing_actix_web::TracingLogger;

use reel_web::cors::build_cors;
use reel_web::{RequestIdMiddleware, TelemetryConfig, init_telemetry};

mod config;
mod handlers;
mod state;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env("auth-service"));

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Reel auth service on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await;
    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(build_cors(&cors_origins))
            .wrap(TracingLogger::default())
            .configure(|cfg| state.configure(cfg))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
