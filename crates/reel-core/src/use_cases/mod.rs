//! Use cases - application logic orchestrating the ports.

mod auth;
mod movies;
mod sync;

#[cfg(test)]
mod fakes;

pub use auth::{
    CurrentUserUseCase, LoginInput, LoginOutput, LoginUseCase, SignUpInput, SignUpUseCase,
};
pub use movies::{MAX_PAGE_LIMIT, MovieCrudUseCase};
pub use sync::{SyncFilmsUseCase, SyncReport, UpsertFromSyncUseCase};
