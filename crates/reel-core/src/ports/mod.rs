//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod catalog;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use catalog::{CatalogEntry, CatalogError, ExternalFilm, FilmCatalog, RejectedFilm};
pub use repository::{BaseRepository, MovieRepository, UserRepository};
