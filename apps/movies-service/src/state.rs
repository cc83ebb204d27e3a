//! Application state - shared across all handlers.

use std::sync::Arc;

use actix_web::web;

use reel_core::ports::{FilmCatalog, MovieRepository, TokenService};
use reel_core::use_cases::{MovieCrudUseCase, SyncFilmsUseCase, UpsertFromSyncUseCase};
use reel_infra::{InMemoryMovieRepository, JwtTokenService, SwapiClient};
use reel_web::ServiceInfo;
use reel_web::extract::{json_config, path_config, query_config};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub movies: MovieCrudUseCase,
    pub sync: SyncFilmsUseCase,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let movies = movie_repository(config).await;
        let catalog: Arc<dyn FilmCatalog> = Arc::new(SwapiClient::new(config.swapi.clone())?);
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        tracing::info!(swapi_url = %config.swapi.url, "Application state initialized");
        Ok(Self::from_parts(movies, catalog, tokens))
    }

    pub fn from_parts(
        movies: Arc<dyn MovieRepository>,
        catalog: Arc<dyn FilmCatalog>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            movies: MovieCrudUseCase::new(movies.clone()),
            sync: SyncFilmsUseCase::new(catalog, UpsertFromSyncUseCase::new(movies)),
            tokens,
        }
    }

    /// Register the state, the token service and the extractor configs.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.clone()))
            .app_data(web::Data::new(self.tokens.clone()))
            .app_data(web::Data::new(ServiceInfo {
                name: "movies-service",
                version: env!("CARGO_PKG_VERSION"),
            }))
            .app_data(json_config())
            .app_data(query_config())
            .app_data(path_config());
    }
}

#[cfg(feature = "postgres")]
async fn movie_repository(config: &AppConfig) -> Arc<dyn MovieRepository> {
    use migration::{MigratorTrait, MoviesMigrator};
    use reel_infra::PostgresMovieRepository;
    use reel_infra::database::connect;

    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return Arc::new(InMemoryMovieRepository::new());
    };

    let conn = match connect(db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            return Arc::new(InMemoryMovieRepository::new());
        }
    };

    if config.run_migrations {
        match MoviesMigrator::up(&conn, None).await {
            Ok(()) => tracing::info!("Movies migrations applied"),
            Err(e) => tracing::error!("Failed to apply movies migrations: {}", e),
        }
    }

    Arc::new(PostgresMovieRepository::new(conn))
}

#[cfg(not(feature = "postgres"))]
async fn movie_repository(_config: &AppConfig) -> Arc<dyn MovieRepository> {
    tracing::info!("Running without postgres feature - using in-memory repository");
    Arc::new(InMemoryMovieRepository::new())
}
