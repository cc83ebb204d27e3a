//! Catalog synchronization from the external film list.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::Movie;
use crate::error::DomainError;
use crate::ports::{CatalogError, ExternalFilm, FilmCatalog, MovieRepository};

/// Inserts or refreshes one externally sourced film, keyed by its external id.
#[derive(Clone)]
pub struct UpsertFromSyncUseCase {
    movies: Arc<dyn MovieRepository>,
}

impl UpsertFromSyncUseCase {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    pub async fn execute(&self, film: &ExternalFilm) -> Result<Movie, DomainError> {
        match self.movies.find_by_swapi_id(film.swapi_id).await? {
            Some(existing) => {
                let refreshed = existing.replace_details(film.details())?;
                Ok(self.movies.update(refreshed).await?)
            }
            None => {
                let movie = Movie::new(film.details(), Some(film.swapi_id))?;
                Ok(self.movies.insert(movie).await?)
            }
        }
    }
}

/// Outcome of one sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub fetched: usize,
    pub synced: usize,
    pub failed: usize,
}

/// Pulls the external film list and upserts every entry.
#[derive(Clone)]
pub struct SyncFilmsUseCase {
    catalog: Arc<dyn FilmCatalog>,
    upsert: UpsertFromSyncUseCase,
}

impl SyncFilmsUseCase {
    pub fn new(catalog: Arc<dyn FilmCatalog>, upsert: UpsertFromSyncUseCase) -> Self {
        Self { catalog, upsert }
    }

    /// A failing film is logged and counted; it never aborts the run.
    pub async fn execute(&self) -> Result<SyncReport, CatalogError> {
        tracing::info!("Starting film catalog sync");
        let entries = self.catalog.fetch_films().await?;

        let mut report = SyncReport {
            fetched: entries.len(),
            ..Default::default()
        };
        for entry in &entries {
            let film = match entry {
                Ok(film) => film,
                Err(rejected) => {
                    report.failed += 1;
                    tracing::error!(title = %rejected.title, reason = %rejected.reason, "Failed to sync film");
                    continue;
                }
            };
            match self.upsert.execute(film).await {
                Ok(movie) => {
                    report.synced += 1;
                    tracing::debug!(swapi_id = film.swapi_id, movie_id = %movie.id, title = %film.title, "Film synced");
                }
                Err(e) => {
                    report.failed += 1;
                    tracing::error!(swapi_id = film.swapi_id, title = %film.title, error = %e, "Failed to sync film");
                }
            }
        }

        tracing::info!(
            fetched = report.fetched,
            synced = report.synced,
            failed = report.failed,
            "Film catalog sync finished"
        );
        Ok(report)
    }
}
