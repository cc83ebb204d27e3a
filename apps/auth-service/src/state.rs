//! Application state - shared across all handlers.

use std::sync::Arc;

use actix_web::web;

use reel_core::ports::{PasswordService, TokenService, UserRepository};
use reel_core::use_cases::{CurrentUserUseCase, LoginUseCase, SignUpUseCase};
use reel_infra::{Argon2PasswordService, InMemoryUserRepository, JwtTokenService};
use reel_web::ServiceInfo;
use reel_web::extract::{json_config, path_config, query_config};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub sign_up: SignUpUseCase,
    pub login: LoginUseCase,
    pub current_user: CurrentUserUseCase,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let users = user_repository(config).await;
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        tracing::info!("Application state initialized");
        Self::from_parts(users, passwords, tokens)
    }

    pub fn from_parts(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            sign_up: SignUpUseCase::new(users.clone(), passwords.clone()),
            login: LoginUseCase::new(users.clone(), passwords, tokens.clone()),
            current_user: CurrentUserUseCase::new(users),
            tokens,
        }
    }

    /// Register the state, the token service and the extractor configs.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.clone()))
            .app_data(web::Data::new(self.tokens.clone()))
            .app_data(web::Data::new(ServiceInfo {
                name: "auth-service",
                version: env!("CARGO_PKG_VERSION"),
            }))
            .app_data(json_config())
            .app_data(query_config())
            .app_data(path_config());
    }
}

#[cfg(feature = "postgres")]
async fn user_repository(config: &AppConfig) -> Arc<dyn UserRepository> {
    use migration::{AuthMigrator, MigratorTrait};
    use reel_infra::PostgresUserRepository;
    use reel_infra::database::connect;

    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return Arc::new(InMemoryUserRepository::new());
    };

    let conn = match connect(db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            return Arc::new(InMemoryUserRepository::new());
        }
    };

    if config.run_migrations {
        match AuthMigrator::up(&conn, None).await {
            Ok(()) => tracing::info!("Auth migrations applied"),
            Err(e) => tracing::error!("Failed to apply auth migrations: {}", e),
        }
    }

    Arc::new(PostgresUserRepository::new(conn))
}

#[cfg(not(feature = "postgres"))]
async fn user_repository(_config: &AppConfig) -> Arc<dyn UserRepository> {
    tracing::info!("Running without postgres feature - using in-memory repository");
    Arc::new(InMemoryUserRepository::new())
}
