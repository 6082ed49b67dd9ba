//! HTTP inbound adapter exposing the clinic REST endpoints.

pub mod appointments;
pub mod auth;
pub mod cors;
pub mod doctors;
pub mod error;
pub mod faq;
pub mod health;
pub mod services;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;

use actix_web::{Scope, web};

use error::json_error_handler;

/// Every clinic endpoint mounted under `/api/v1`.
///
/// JSON bodies are decoded regardless of the request content type; decode
/// failures become `400 {"error": "Invalid request body"}`.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(
            web::JsonConfig::default()
                .content_type_required(false)
                .error_handler(json_error_handler),
        )
        .service(auth::resource())
        .service(doctors::resource())
        .service(appointments::resource())
        .service(faq::resource())
        .service(services::resource())
}
