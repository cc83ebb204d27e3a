//! Movie entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use reel_core::domain::Movie;
use reel_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique, nullable)]
    pub swapi_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    pub episode_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub opening_crawl: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub director: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub producer: Option<String>,
    pub release_date: Option<Date>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Movie.
impl TryFrom<Model> for Movie {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            title: model.title,
            swapi_id: model.swapi_id,
            episode_id: model.episode_id,
            opening_crawl: model.opening_crawl,
            director: model.director,
            producer: model.producer,
            release_date: model.release_date,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

/// Conversion from Domain Movie to SeaORM ActiveModel.
impl From<Movie> for ActiveModel {
    fn from(movie: Movie) -> Self {
        Self {
            id: Set(movie.id),
            swapi_id: Set(movie.swapi_id),
            title: Set(movie.title),
            episode_id: Set(movie.episode_id),
            opening_crawl: Set(movie.opening_crawl),
            director: Set(movie.director),
            producer: Set(movie.producer),
            release_date: Set(movie.release_date),
            created_at: Set(movie.created_at.into()),
            updated_at: Set(movie.updated_at.into()),
        }
    }
}
