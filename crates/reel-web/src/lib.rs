//! # Reel Web
//!
//! Actix-web building blocks shared by the auth and movies services:
//! problem-document errors, bearer authentication, request IDs, CORS,
//! extractor configs, telemetry and the health endpoint.

pub mod auth;
pub mod cors;
pub mod error;
pub mod extract;
pub mod health;
pub mod request_id;
pub mod telemetry;

pub use auth::{AdminIdentity, Authorized, Identity, UserIdentity};
pub use error::{AppError, AppResult};
pub use health::ServiceInfo;
pub use request_id::{RequestId, RequestIdMiddleware};
pub use telemetry::{TelemetryConfig, init_telemetry};
