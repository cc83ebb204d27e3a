//! HTTP handlers and route configuration.

mod movies;

use actix_web::web;

use reel_web::health::health_check;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/movies")
            .route("", web::get().to(movies::list))
            .route("", web::post().to(movies::create))
            .route("/sync", web::post().to(movies::sync))
            .route("/{id}", web::get().to(movies::get))
            .route("/{id}", web::patch().to(movies::update))
            .route("/{id}", web::delete().to(movies::delete)),
    );
}
