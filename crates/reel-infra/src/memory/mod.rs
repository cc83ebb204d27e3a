//! In-memory repositories - used as fallback when no database is configured.
//!
//! Data is lost on process restart.

mod movie;
mod user;

pub use movie::InMemoryMovieRepository;
pub use user::InMemoryUserRepository;
