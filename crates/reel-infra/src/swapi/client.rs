use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use reel_core::ports::{CatalogEntry, CatalogError, ExternalFilm, FilmCatalog, RejectedFilm};

const DEFAULT_URL: &str = "https://swapi.dev/api/films/";

#[derive(Debug, Clone)]
pub struct SwapiConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for SwapiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl SwapiConfig {
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("SWAPI_URL")
                .ok()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_URL.to_string()),
            timeout: Duration::from_secs(
                std::env::var("SWAPI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SwapiResponse {
    results: Vec<SwapiFilm>,
}

#[derive(Debug, Deserialize)]
struct SwapiFilm {
    title: String,
    episode_id: Option<i32>,
    opening_crawl: Option<String>,
    director: Option<String>,
    producer: Option<String>,
    release_date: Option<String>,
    url: String,
}

/// HTTP client for the SWAPI `films` resource.
pub struct SwapiClient {
    http_client: Client,
    url: String,
}

impl SwapiClient {
    pub fn new(config: SwapiConfig) -> Result<Self, CatalogError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        Ok(Self {
            http_client,
            url: config.url,
        })
    }
}

#[async_trait]
impl FilmCatalog for SwapiClient {
    async fn fetch_films(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        tracing::debug!(url = %self.url, "Fetching films from SWAPI");

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body: SwapiResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(into_external_films(body))
    }
}

fn into_external_films(body: SwapiResponse) -> Vec<CatalogEntry> {
    body.results.into_iter().map(into_external_film).collect()
}

fn into_external_film(film: SwapiFilm) -> CatalogEntry {
    let Some(swapi_id) = extract_film_id(&film.url) else {
        tracing::warn!(url = %film.url, title = %film.title, "Film url carries no id");
        return Err(RejectedFilm {
            reason: format!("no film id in url {:?}", film.url),
            title: film.title,
        });
    };
    Ok(ExternalFilm {
        swapi_id,
        release_date: film.release_date.as_deref().and_then(parse_release_date),
        title: film.title,
        episode_id: film.episode_id,
        opening_crawl: non_empty(film.opening_crawl),
        director: non_empty(film.director),
        producer: non_empty(film.producer),
    })
}

/// Numeric id from the `/films/<n>` path segment of a resource url such as
/// `https://swapi.dev/api/films/4/?format=json`.
fn extract_film_id(url: &str) -> Option<i32> {
    url.match_indices("/films/").find_map(|(at, marker)| {
        let rest = &url[at + marker.len()..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (digits, tail) = rest.split_at(end);
        let terminated = tail.is_empty() || tail.starts_with(['/', '?', '#']);
        if digits.is_empty() || !terminated {
            return None;
        }
        digits.parse().ok()
    })
}

fn parse_release_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
