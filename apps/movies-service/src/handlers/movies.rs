//! Movie catalog handlers.
//!
//! Role extractors come first in every signature so an unauthenticated
//! caller gets 401 and a caller with the wrong role gets 403 before the
//! body or id is looked at.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use reel_shared::dto::{
    CreateMovieRequest, MovieResponse, PaginatedMoviesResponse, PaginationQuery,
    UpdateMovieRequest,
};
use reel_web::{AdminIdentity, AppError, AppResult, UserIdentity};

use crate::state::AppState;

fn parse_movie_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("invalid movie id: {raw}")))
}

/// GET /movies?page=&limit= - public
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PaginationQuery>,
) -> AppResult<HttpResponse> {
    let page = state.movies.list(query.page, query.limit).await?;

    Ok(HttpResponse::Ok().json(PaginatedMoviesResponse::from(page)))
}

/// GET /movies/{id}
pub async fn get(
    state: web::Data<AppState>,
    _caller: UserIdentity,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_movie_id(&id)?;
    let movie = state.movies.get(id).await?;

    Ok(HttpResponse::Ok().json(MovieResponse::from(movie)))
}

/// POST /movies
pub async fn create(
    state: web::Data<AppState>,
    caller: AdminIdentity,
    body: web::Json<CreateMovieRequest>,
) -> AppResult<HttpResponse> {
    let movie = state.movies.create(body.into_inner().into()).await?;
    tracing::debug!(movie_id = %movie.id, admin_id = %caller.identity.user_id, "Created by admin");

    Ok(HttpResponse::Created().json(MovieResponse::from(movie)))
}

/// PATCH /movies/{id}
pub async fn update(
    state: web::Data<AppState>,
    _caller: AdminIdentity,
    id: web::Path<String>,
    body: web::Json<UpdateMovieRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_movie_id(&id)?;
    let movie = state.movies.update(id, body.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(MovieResponse::from(movie)))
}

/// DELETE /movies/{id}
pub async fn delete(
    state: web::Data<AppState>,
    _caller: AdminIdentity,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_movie_id(&id)?;
    state.movies.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// POST /movies/sync - run the catalog sync now
pub async fn sync(state: web::Data<AppState>, caller: AdminIdentity) -> AppResult<HttpResponse> {
    tracing::info!(admin_id = %caller.identity.user_id, "Manual catalog sync requested");
    let report = state.sync.execute().await?;

    Ok(HttpResponse::Ok().json(report))
}
