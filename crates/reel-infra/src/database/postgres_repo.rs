//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

use reel_core::domain::{Email, Movie, Page, User, page_offset};
use reel_core::error::RepoError;
use reel_core::ports::{MovieRepository, UserRepository};

use super::entity::movie::{self, Entity as MovieEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL movie repository.
pub type PostgresMovieRepository = PostgresBaseRepository<MovieEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %email.masked(), "Finding user by email");

        UserEntity::find()
            .filter(user::Column::Email.eq(email.as_str()))
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(User::try_from)
            .transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, RepoError> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email.as_str()))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn find_page(&self, page: u64, limit: u64) -> Result<Page<Movie>, RepoError> {
        let offset = page_offset(page, limit)
            .ok_or_else(|| RepoError::Query(format!("page {page} is out of range")))?;

        let models = MovieEntity::find()
            .order_by_desc(movie::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        let total = MovieEntity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        let items = models
            .into_iter()
            .map(Movie::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            total,
            page,
            limit,
        })
    }

    async fn find_by_swapi_id(&self, swapi_id: i32) -> Result<Option<Movie>, RepoError> {
        MovieEntity::find()
            .filter(movie::Column::SwapiId.eq(swapi_id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(Movie::try_from)
            .transpose()
    }
}
