//! Movie catalog CRUD.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Movie, MovieDetails, MoviePatch, Page, page_offset};
use crate::error::{DomainError, RepoError};
use crate::ports::MovieRepository;

pub const MAX_PAGE_LIMIT: u64 = 100;

#[derive(Clone)]
pub struct MovieCrudUseCase {
    movies: Arc<dyn MovieRepository>,
}

fn not_found(id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity_type: "Movie",
        id,
    }
}

impl MovieCrudUseCase {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    pub async fn list(&self, page: u64, limit: u64) -> Result<Page<Movie>, DomainError> {
        if page == 0 {
            return Err(DomainError::validation("page must be at least 1"));
        }
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(DomainError::Validation(format!(
                "limit must be between 1 and {MAX_PAGE_LIMIT}"
            )));
        }
        if page_offset(page, limit).is_none() {
            return Err(DomainError::validation("page is out of range"));
        }
        Ok(self.movies.find_page(page, limit).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Movie, DomainError> {
        self.movies.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, details: MovieDetails) -> Result<Movie, DomainError> {
        let movie = Movie::new(details, None)?;
        let saved = self.movies.insert(movie).await?;
        tracing::info!(movie_id = %saved.id, title = %saved.title, "Movie created");
        Ok(saved)
    }

    pub async fn update(&self, id: Uuid, patch: MoviePatch) -> Result<Movie, DomainError> {
        let existing = self.get(id).await?;
        let updated = existing.apply_patch(patch)?;
        let saved = self.movies.update(updated).await.map_err(|e| match e {
            RepoError::NotFound => not_found(id),
            other => other.into(),
        })?;
        tracing::info!(movie_id = %id, "Movie updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.get(id).await?;
        self.movies.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => not_found(id),
            other => other.into(),
        })?;
        tracing::info!(movie_id = %id, "Movie deleted");
        Ok(())
    }
}
