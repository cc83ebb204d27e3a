//! # Reel Core
//!
//! The domain layer shared by the auth and movies services.
//! This crate contains entities, value objects, ports and use cases with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{DomainError, RepoError};
