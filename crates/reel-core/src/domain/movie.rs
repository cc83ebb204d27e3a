use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Movie entity - one entry of the catalog.
///
/// `swapi_id` is set only for movies imported by the catalog sync and is
/// unique across the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub swapi_id: Option<i32>,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full set of editable movie fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDetails {
    pub title: String,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<NaiveDate>,
}

/// Partial update; `None` keeps the current value.
///
/// The nullable descriptive fields are tri-state: `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub episode_id: Option<Option<i32>>,
    pub opening_crawl: Option<Option<String>>,
    pub director: Option<Option<String>>,
    pub producer: Option<Option<String>>,
    pub release_date: Option<NaiveDate>,
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("title must not be empty"));
    }
    Ok(())
}

impl Movie {
    /// Create a new movie with generated ID and timestamps.
    pub fn new(details: MovieDetails, swapi_id: Option<i32>) -> Result<Self, DomainError> {
        validate_title(&details.title)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: details.title,
            swapi_id,
            episode_id: details.episode_id,
            opening_crawl: details.opening_crawl,
            director: details.director,
            producer: details.producer,
            release_date: details.release_date,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply_patch(mut self, patch: MoviePatch) -> Result<Self, DomainError> {
        if let Some(title) = patch.title {
            validate_title(&title)?;
            self.title = title;
        }
        if let Some(episode_id) = patch.episode_id {
            self.episode_id = episode_id;
        }
        if let Some(opening_crawl) = patch.opening_crawl {
            self.opening_crawl = opening_crawl;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(producer) = patch.producer {
            self.producer = producer;
        }
        if patch.release_date.is_some() {
            self.release_date = patch.release_date;
        }
        self.updated_at = Utc::now();
        Ok(self)
    }

    /// Overwrite every editable field, clearing the ones `details` omits.
    pub fn replace_details(mut self, details: MovieDetails) -> Result<Self, DomainError> {
        validate_title(&details.title)?;
        self.title = details.title;
        self.episode_id = details.episode_id;
        self.opening_crawl = details.opening_crawl;
        self.director = details.director;
        self.producer = details.producer;
        self.release_date = details.release_date;
        self.updated_at = Utc::now();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a_new_hope() -> MovieDetails {
        MovieDetails {
            title: "A New Hope".to_string(),
            episode_id: Some(4),
            opening_crawl: Some("It is a period of civil war...".to_string()),
            director: Some("George Lucas".to_string()),
            producer: Some("Gary Kurtz, Rick McCallum".to_string()),
            release_date: NaiveDate::from_ymd_opt(1977, 5, 25),
        }
    }

    #[test]
    fn test_new_rejects_blank_title() {
        let details = MovieDetails {
            title: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            Movie::new(details, None),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_apply_patch_keeps_unset_fields() {
        let movie = Movie::new(a_new_hope(), Some(1)).unwrap();
        let id = movie.id;
        let created_at = movie.created_at;

        let patched = movie
            .apply_patch(MoviePatch {
                director: Some(Some("Irvin Kershner".to_string())),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(patched.id, id);
        assert_eq!(patched.created_at, created_at);
        assert_eq!(patched.swapi_id, Some(1));
        assert_eq!(patched.title, "A New Hope");
        assert_eq!(patched.episode_id, Some(4));
        assert_eq!(patched.director.as_deref(), Some("Irvin Kershner"));
        assert!(patched.updated_at >= created_at);
    }

    #[test]
    fn test_apply_patch_clears_explicit_nulls() {
        let movie = Movie::new(a_new_hope(), Some(1)).unwrap();

        let patched = movie
            .apply_patch(MoviePatch {
                episode_id: Some(None),
                opening_crawl: Some(None),
                director: Some(None),
                producer: Some(None),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(patched.title, "A New Hope");
        assert_eq!(patched.episode_id, None);
        assert_eq!(patched.opening_crawl, None);
        assert_eq!(patched.director, None);
        assert_eq!(patched.producer, None);
        assert_eq!(patched.release_date, NaiveDate::from_ymd_opt(1977, 5, 25));
    }

    #[test]
    fn test_replace_details_clears_missing_fields() {
        let movie = Movie::new(a_new_hope(), Some(1)).unwrap();

        let replaced = movie
            .replace_details(MovieDetails {
                title: "A New Hope (Special Edition)".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(replaced.title, "A New Hope (Special Edition)");
        assert_eq!(replaced.swapi_id, Some(1));
        assert_eq!(replaced.episode_id, None);
        assert_eq!(replaced.release_date, None);
    }
}
