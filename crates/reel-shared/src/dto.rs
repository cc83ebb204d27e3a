//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use reel_core::domain::{Movie, MovieDetails, MoviePatch, Page, PublicUser, Role};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl From<PublicUser> for UserResponse {
    fn from(user: PublicUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}

/// Response containing an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

impl LoginResponse {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: expires_in.max(0).unsigned_abs(),
        }
    }
}

/// Request to create a movie. Dates use `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovieRequest {
    pub title: String,
    #[serde(default)]
    pub episode_id: Option<i32>,
    #[serde(default)]
    pub opening_crawl: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub producer: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

impl From<CreateMovieRequest> for MovieDetails {
    fn from(req: CreateMovieRequest) -> Self {
        Self {
            title: req.title,
            episode_id: req.episode_id,
            opening_crawl: req.opening_crawl,
            director: req.director,
            producer: req.producer,
            release_date: req.release_date,
        }
    }
}

/// Partial movie update.
///
/// Omitted fields are left untouched. An explicit `null` clears
/// `episode_id`, `opening_crawl`, `director` and `producer`; a null `title` or
/// `release_date` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateMovieRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub episode_id: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub opening_crawl: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub director: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub producer: Option<Option<String>>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

/// A present field becomes `Some`, so `null` reads as `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<UpdateMovieRequest> for MoviePatch {
    fn from(req: UpdateMovieRequest) -> Self {
        Self {
            title: req.title,
            episode_id: req.episode_id,
            opening_crawl: req.opening_crawl,
            director: req.director,
            producer: req.producer,
            release_date: req.release_date,
        }
    }
}

/// A movie as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieResponse {
    pub id: Uuid,
    #[serde(rename = "swapiId")]
    pub swapi_id: Option<i32>,
    pub title: String,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<NaiveDate>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            swapi_id: movie.swapi_id,
            title: movie.title,
            episode_id: movie.episode_id,
            opening_crawl: movie.opening_crawl,
            director: movie.director,
            producer: movie.producer,
            release_date: movie.release_date,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}

/// One page of movies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedMoviesResponse {
    pub items: Vec<MovieResponse>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl From<Page<Movie>> for PaginatedMoviesResponse {
    fn from(page: Page<Movie>) -> Self {
        let page = page.map(MovieResponse::from);
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}

/// `?page=&limit=` query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}
