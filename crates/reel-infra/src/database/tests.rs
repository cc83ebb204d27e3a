use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Value};
use uuid::Uuid;

use reel_core::domain::{Email, Movie, MovieDetails, Role};
use reel_core::error::RepoError;
use reel_core::ports::{BaseRepository, MovieRepository, UserRepository};

use super::entity::{movie, user};
use super::postgres_repo::{PostgresMovieRepository, PostgresUserRepository};

fn movie_row(id: Uuid, swapi_id: Option<i32>, title: &str) -> movie::Model {
    let now = Utc::now();
    movie::Model {
        id,
        swapi_id,
        title: title.to_owned(),
        episode_id: Some(4),
        opening_crawl: None,
        director: Some("George Lucas".to_owned()),
        producer: None,
        release_date: NaiveDate::from_ymd_opt(1977, 5, 25),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn user_row(role: &str) -> user::Model {
    let now = Utc::now();
    user::Model {
        id: Uuid::new_v4(),
        email: "luke@rebels.example".to_owned(),
        password_hash: "$argon2id$stub".to_owned(),
        role: role.to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_movie_by_id() {
    let movie_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![movie_row(movie_id, Some(1), "A New Hope")]])
        .into_connection();

    let repo = PostgresMovieRepository::new(db);

    let movie: Option<Movie> = repo.find_by_id(movie_id).await.unwrap();

    let movie = movie.unwrap();
    assert_eq!(movie.id, movie_id);
    assert_eq!(movie.title, "A New Hope");
    assert_eq!(movie.release_date, NaiveDate::from_ymd_opt(1977, 5, 25));
}

#[tokio::test]
async fn test_find_movie_by_swapi_id_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<movie::Model>::new()])
        .into_connection();

    let repo = PostgresMovieRepository::new(db);

    assert!(repo.find_by_swapi_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_movie_returns_stored_row() {
    let movie = Movie::new(
        MovieDetails {
            title: "A New Hope".to_string(),
            ..Default::default()
        },
        Some(1),
    )
    .unwrap();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![movie_row(movie.id, Some(1), "A New Hope")]])
        .into_connection();

    let repo = PostgresMovieRepository::new(db);

    let saved = repo.insert(movie.clone()).await.unwrap();
    assert_eq!(saved.id, movie.id);
    assert_eq!(saved.swapi_id, Some(1));
}

#[tokio::test]
async fn test_find_page_reports_total() {
    let rows = vec![
        movie_row(Uuid::new_v4(), None, "Rogue One"),
        movie_row(Uuid::new_v4(), Some(1), "A New Hope"),
    ];
    let count_row = BTreeMap::from([("num_items", Value::BigInt(Some(7)))]);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([rows])
        .append_query_results([vec![count_row]])
        .into_connection();

    let repo = PostgresMovieRepository::new(db);

    let page = repo.find_page(2, 2).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].title, "Rogue One");
    assert_eq!(page.total, 7);
    assert_eq!((page.page, page.limit), (2, 2));
}

#[tokio::test]
async fn test_find_page_rejects_unaddressable_offset() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let repo = PostgresMovieRepository::new(db);

    let result = repo.find_page(u64::MAX / 2, 100).await;
    assert!(matches!(result, Err(RepoError::Query(_))));
}

#[tokio::test]
async fn test_delete_missing_movie_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresMovieRepository::new(db);

    let result = BaseRepository::<Movie, Uuid>::delete(&repo, Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_query_failure_maps_to_query_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("boom".to_owned())])
        .into_connection();

    let repo = PostgresMovieRepository::new(db);

    assert!(matches!(
        repo.find_by_swapi_id(1).await,
        Err(RepoError::Query(_))
    ));
}

#[tokio::test]
async fn test_find_user_by_email_maps_role() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user_row("ADMIN")]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let user = repo
        .find_by_email(&Email::parse("luke@rebels.example").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.email.as_str(), "luke@rebels.example");
}

#[tokio::test]
async fn test_unknown_stored_role_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user_row("SUPERUSER")]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let result = repo
        .find_by_email(&Email::parse("luke@rebels.example").unwrap())
        .await;
    assert!(matches!(result, Err(RepoError::Query(_))));
}
