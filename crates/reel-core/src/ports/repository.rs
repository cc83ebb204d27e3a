use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Email, Movie, Page, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity. Fails with `NotFound` if it is gone.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepoError>;

    async fn exists_by_email(&self, email: &Email) -> Result<bool, RepoError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}

/// Movie repository.
#[async_trait]
pub trait MovieRepository: BaseRepository<Movie, Uuid> {
    /// Newest movies first. `page` is 1-based.
    async fn find_page(&self, page: u64, limit: u64) -> Result<Page<Movie>, RepoError>;

    async fn find_by_swapi_id(&self, swapi_id: i32) -> Result<Option<Movie>, RepoError>;
}
