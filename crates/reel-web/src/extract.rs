//! Extractor configs that report malformed input as problem documents.

use actix_web::{error, web};

use crate::error::AppError;

/// JSON body config: parse failures become 400 problem documents.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = match &err {
            error::JsonPayloadError::ContentType => {
                "Content-Type must be application/json".to_string()
            }
            other => other.to_string(),
        };
        AppError::BadRequest(detail).into()
    })
}

/// Query string config: parse failures become 400 problem documents.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Path config: parse failures become 400 problem documents.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
