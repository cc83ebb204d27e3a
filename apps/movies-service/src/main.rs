//! # Reel Movies Service
//!
//! Movie catalog over HTTP plus the per-minute SWAPI sync.

use actix_web::{App, HttpServer};
use tracing_actix_web::TracingLogger;

use reel_web::cors::build_cors;
use reel_web::{RequestIdMiddleware, TelemetryConfig, init_telemetry};

#[cfg(feature = "scheduler")]
mod background;
mod config;
mod handlers;
mod state;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env("movies-service"));

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Reel movies service on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await?;

    #[cfg(feature = "scheduler")]
    let mut scheduler =
        background::scheduler::start_sync_job(&config.scheduler, state.sync.clone()).await?;

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

    #[cfg(feature = "scheduler")]
    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }

    Ok(())
}
