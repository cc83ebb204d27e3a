//! Hand-written port fakes for use case tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Email, Movie, Page, Password, PasswordHash, Role, User};
use crate::error::RepoError;
use crate::ports::{
    AuthError, BaseRepository, CatalogEntry, CatalogError, ExternalFilm, FilmCatalog,
    MovieRepository, PasswordService, TokenClaims, TokenService, UserRepository,
};

#[derive(Default)]
pub struct FakeUserRepository {
    users: Mutex<Vec<User>>,
}

impl FakeUserRepository {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for FakeUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("users_email_key".into()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        *slot = user.clone();
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
}

#[derive(Default)]
pub struct FakeMovieRepository {
    movies: Mutex<Vec<Movie>>,
}

impl FakeMovieRepository {
    pub fn len(&self) -> usize {
        self.movies.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseRepository<Movie, Uuid> for FakeMovieRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Movie>, RepoError> {
        Ok(self.movies.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn insert(&self, movie: Movie) -> Result<Movie, RepoError> {
        let mut movies = self.movies.lock().unwrap();
        if movie.swapi_id.is_some() && movies.iter().any(|m| m.swapi_id == movie.swapi_id) {
            return Err(RepoError::Constraint("movies_swapi_id_key".into()));
        }
        movies.push(movie.clone());
        Ok(movie)
    }

    async fn update(&self, movie: Movie) -> Result<Movie, RepoError> {
        let mut movies = self.movies.lock().unwrap();
        let slot = movies
            .iter_mut()
            .find(|m| m.id == movie.id)
            .ok_or(RepoError::NotFound)?;
        *slot = movie.clone();
        Ok(movie)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut movies = self.movies.lock().unwrap();
        let before = movies.len();
        movies.retain(|m| m.id != id);
        if movies.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl MovieRepository for FakeMovieRepository {
    async fn find_page(&self, page: u64, limit: u64) -> Result<Page<Movie>, RepoError> {
        let movies = self.movies.lock().unwrap();
        // Insertion order breaks created_at ties, newest first.
        let mut ordered: Vec<Movie> = movies.iter().rev().cloned().collect();
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let items = ordered
            .into_iter()
            .skip(((page - 1) * limit) as usize)
            .take(limit as usize)
            .collect();
        Ok(Page {
            items,
            total: movies.len() as u64,
            page,
            limit,
        })
    }

    async fn find_by_swapi_id(&self, swapi_id: i32) -> Result<Option<Movie>, RepoError> {
        Ok(self
            .movies
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.swapi_id == Some(swapi_id))
            .cloned())
    }
}

/// "Hashes" by prefixing, so tests can assert on the stored value.
pub struct FakePasswordService;

impl PasswordService for FakePasswordService {
    fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError> {
        PasswordHash::from_hash(format!("hashed:{}", password.expose()))
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &Password, hash: &PasswordHash) -> Result<bool, AuthError> {
        Ok(hash.as_str() == format!("hashed:{}", password.expose()))
    }
}

pub struct FakeTokenService;

impl TokenService for FakeTokenService {
    fn generate_token(&self, user: &User) -> Result<String, AuthError> {
        Ok(format!("token-for-{}", user.id))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let id = token
            .strip_prefix("token-for-")
            .and_then(|id| Uuid::parse_str(id).ok())
            .ok_or_else(|| AuthError::InvalidToken(token.to_string()))?;
        Ok(TokenClaims {
            user_id: id,
            email: String::new(),
            role: Role::User,
            exp: 0,
        })
    }

    fn expiration_seconds(&self) -> i64 {
        3600
    }
}

pub struct FakeFilmCatalog {
    entries: Vec<CatalogEntry>,
    fail_status: Option<u16>,
}

impl FakeFilmCatalog {
    pub fn returning(films: Vec<ExternalFilm>) -> Self {
        Self::listing(films.into_iter().map(Ok).collect())
    }

    pub fn listing(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            fail_status: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            entries: Vec::new(),
            fail_status: Some(status),
        }
    }
}

#[async_trait]
impl FilmCatalog for FakeFilmCatalog {
    async fn fetch_films(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        match self.fail_status {
            Some(status) => Err(CatalogError::Status(status)),
            None => Ok(self.entries.clone()),
        }
    }
}
