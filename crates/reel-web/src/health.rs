//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

/// Identity reported by `GET /health`.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// GET /health
pub async fn health_check(info: web::Data<ServiceInfo>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        service: info.name,
        version: info.version,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_rt::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ServiceInfo {
                    name: "catalog-test",
                    version: "9.9.9",
                }))
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "catalog-test");
        assert_eq!(body["version"], "9.9.9");
        assert!(body["timestamp"].is_string());
    }
}
