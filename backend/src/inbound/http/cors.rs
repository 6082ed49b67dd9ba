//! Cross-origin response headers shared by every clinic endpoint.
//!
//! Each resource answers its own `OPTIONS` preflight with a fixed
//! [`CorsPolicy`]. All other responses, success or error, carry a wildcard
//! `Access-Control-Allow-Origin` and a JSON content type.

use actix_web::http::StatusCode;
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE,
};
use actix_web::{HttpResponse, HttpResponseBuilder};
use serde::Serialize;

/// Value of `Access-Control-Allow-Origin` on every response.
pub const ALLOW_ANY_ORIGIN: &str = "*";

/// Preflight cache lifetime advertised to browsers, in seconds.
pub const PREFLIGHT_MAX_AGE_SECS: u32 = 86_400;

/// Preflight answer for one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allow_methods: &'static str,
    pub allow_headers: &'static str,
}

impl CorsPolicy {
    /// Read-only resources: doctors, FAQ and the service catalogue.
    pub const READ_ONLY: Self = Self {
        allow_methods: "GET, OPTIONS",
        allow_headers: "Content-Type",
    };

    /// Resources accepting writes from signed-in clients.
    pub const READ_WRITE: Self = Self {
        allow_methods: "GET, POST, OPTIONS",
        allow_headers: "Content-Type, X-Auth-Token",
    };

    /// Build the `200` preflight response with an empty body.
    pub fn preflight(self) -> HttpResponse {
        HttpResponse::Ok()
            .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ANY_ORIGIN))
            .insert_header((ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods))
            .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers))
            .insert_header((ACCESS_CONTROL_MAX_AGE, PREFLIGHT_MAX_AGE_SECS.to_string()))
            .finish()
    }
}

/// Start a response builder carrying the wildcard origin header.
pub fn with_cors(status: StatusCode) -> HttpResponseBuilder {
    let mut builder = HttpResponse::build(status);
    builder.insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ANY_ORIGIN));
    builder
}

/// `200 OK` JSON response with the wildcard origin header.
pub fn json_ok<T: Serialize>(body: &T) -> HttpResponse {
    with_cors(StatusCode::OK).json(body)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::http::header::CONTENT_TYPE;
    use rstest::rstest;

    fn header<'a>(response: &'a HttpResponse, name: &str) -> Option<&'a str> {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    #[rstest]
    #[case(CorsPolicy::READ_ONLY, "GET, OPTIONS", "Content-Type")]
    #[case(CorsPolicy::READ_WRITE, "GET, POST, OPTIONS", "Content-Type, X-Auth-Token")]
    fn preflight_advertises_policy(
        #[case] policy: CorsPolicy,
        #[case] methods: &str,
        #[case] headers: &str,
    ) {
        let response = policy.preflight();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(header(&response, "access-control-allow-origin"), Some("*"));
        assert_eq!(header(&response, "access-control-allow-methods"), Some(methods));
        assert_eq!(header(&response, "access-control-allow-headers"), Some(headers));
        assert_eq!(header(&response, "access-control-max-age"), Some("86400"));
        let body = response.into_body().try_into_bytes().expect("sized body");
        assert!(body.is_empty());
    }

    #[rstest]
    fn json_ok_sets_origin_and_content_type() {
        let response = json_ok(&serde_json::json!([]));
        assert_eq!(header(&response, "access-control-allow-origin"), Some("*"));
        assert_eq!(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("application/json")
        );
    }
}
