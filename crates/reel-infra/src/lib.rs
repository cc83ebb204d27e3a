//! # Reel Infrastructure
//!
//! Concrete implementations of the ports defined in `reel-core`.
//! This crate contains database, security, and external service integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory repositories only
//! - `postgres` - PostgreSQL repositories via SeaORM
//! - `auth` - JWT + Argon2 authentication
//! - `swapi` - HTTP client for the SWAPI film catalog

pub mod memory;

#[cfg(feature = "postgres")]
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

#[cfg(feature = "swapi")]
pub mod swapi;

// Re-exports - In-Memory
pub use memory::{InMemoryMovieRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresMovieRepository, PostgresUserRepository};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

#[cfg(feature = "swapi")]
pub use swapi::{SwapiClient, SwapiConfig};
