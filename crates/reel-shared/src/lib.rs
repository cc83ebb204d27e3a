//! # Reel Shared
//!
//! Wire types shared by the auth and movies services: request/response DTOs
//! and the RFC 7807 error body.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
