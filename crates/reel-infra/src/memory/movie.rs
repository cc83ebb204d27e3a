use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use reel_core::domain::{Movie, Page};
use reel_core::error::RepoError;
use reel_core::ports::{BaseRepository, MovieRepository};

/// Movie store backed by a `Vec` behind an async `RwLock`.
///
/// Enforces the unique `swapi_id` rule of the `movies` table.
#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn swapi_id_taken(movies: &[Movie], candidate: &Movie) -> bool {
    candidate.swapi_id.is_some()
        && movies
            .iter()
            .any(|m| m.id != candidate.id && m.swapi_id == candidate.swapi_id)
}

#[async_trait]
impl BaseRepository<Movie, Uuid> for InMemoryMovieRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Movie>, RepoError> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| m.id == id).cloned())
    }

    async fn insert(&self, movie: Movie) -> Result<Movie, RepoError> {
        let mut movies = self.movies.write().await;
        if swapi_id_taken(&movies, &movie) {
            return Err(RepoError::Constraint("movies_swapi_id_key".to_string()));
        }
        movies.push(movie.clone());
        Ok(movie)
    }

    async fn update(&self, movie: Movie) -> Result<Movie, RepoError> {
        let mut movies = self.movies.write().await;
        if swapi_id_taken(&movies, &movie) {
            return Err(RepoError::Constraint("movies_swapi_id_key".to_string()));
        }
        let slot = movies
            .iter_mut()
            .find(|m| m.id == movie.id)
            .ok_or(RepoError::NotFound)?;
        *slot = movie.clone();
        Ok(movie)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut movies = self.movies.write().await;
        let before = movies.len();
        movies.retain(|m| m.id != id);
        if movies.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_page(&self, page: u64, limit: u64) -> Result<Page<Movie>, RepoError> {
        let movies = self.movies.read().await;

        // Later inserts win created_at ties.
        let mut ordered: Vec<&Movie> = movies.iter().rev().collect();
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let offset = page.saturating_sub(1).saturating_mul(limit);
        let items = ordered
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(Page {
            items,
            total: movies.len() as u64,
            page,
            limit,
        })
    }

    async fn find_by_swapi_id(&self, swapi_id: i32) -> Result<Option<Movie>, RepoError> {
        let movies = self.movies.read().await;
        Ok(movies
            .iter()
            .find(|m| m.swapi_id == Some(swapi_id))
            .cloned())
    }
}
