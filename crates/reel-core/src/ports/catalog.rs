//! External film catalog port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::MovieDetails;

/// A film as published by the external catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalFilm {
    pub swapi_id: i32,
    pub title: String,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl ExternalFilm {
    pub fn details(&self) -> MovieDetails {
        MovieDetails {
            title: self.title.clone(),
            episode_id: self.episode_id,
            opening_crawl: self.opening_crawl.clone(),
            director: self.director.clone(),
            producer: self.producer.clone(),
            release_date: self.release_date,
        }
    }
}

/// A listed film the catalog could not map to an [`ExternalFilm`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unusable film {title:?}: {reason}")]
pub struct RejectedFilm {
    pub title: String,
    pub reason: String,
}

/// One entry of the catalog listing.
pub type CatalogEntry = Result<ExternalFilm, RejectedFilm>;

/// Source of films for the catalog sync.
#[async_trait]
pub trait FilmCatalog: Send + Sync {
    /// Every listed film, in catalog order; unusable ones come back as `Err`.
    async fn fetch_films(&self) -> Result<Vec<CatalogEntry>, CatalogError>;
}

/// Catalog fetch errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),
}
