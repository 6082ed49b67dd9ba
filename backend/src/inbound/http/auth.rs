//! Registration and login handler.
//!
//! ```text
//! OPTIONS /api/v1/auth
//! POST    /api/v1/auth {"action":"register","email":"..","password":"..","full_name":".."}
//! POST    /api/v1/auth {"action":"login","email":"..","password":".."}
//! ```

use actix_web::{HttpResponse, Resource, http::Method, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::AuthSession;
use crate::domain::{Error, LoginCredentials, Registration};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cors::{CorsPolicy, json_ok};
use crate::inbound::http::error::{ErrorBody, method_not_allowed};
use crate::inbound::http::state::HttpState;

const CORS: CorsPolicy = CorsPolicy::READ_WRITE;

/// Operation requested through the shared auth endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuthAction {
    Register,
    Login,
    /// Any value the handler does not recognise.
    #[serde(other)]
    #[schema(rename = "other")]
    Unknown,
}

/// Request body for `POST /api/v1/auth`.
///
/// Every field is optional on the wire so missing values are reported with
/// the endpoint's own messages instead of a decode failure.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AuthRequest {
    pub action: Option<AuthAction>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    pub password: Option<String>,
    #[schema(example = "Ada Lovelace")]
    pub full_name: Option<String>,
    #[schema(example = "+44 20 7946 0000")]
    pub phone: Option<String>,
}

/// Public part of the signed-in user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthUserBody {
    pub id: i32,
    pub email: String,
    pub full_name: String,
}

/// Successful register/login response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    /// Base64 of `user_id:email`; an identifier, not a verified credential.
    #[schema(example = "MTpmb29AYmFyLmNvbQ==")]
    pub token: String,
    pub user: AuthUserBody,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        let AuthSession { token, user } = session;
        Self {
            token: token.into_inner(),
            user: AuthUserBody {
                id: user.id().get(),
                email: user.email().to_owned(),
                full_name: user.full_name().to_owned(),
            },
        }
    }
}

/// Register a patient or log one in, depending on `action`.
#[utoipa::path(
    post,
    path = "/api/v1/auth",
    request_body = AuthRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthResponse),
        (status = 400, description = "Missing fields or unknown action", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "authenticate",
    security([])
)]
pub async fn authenticate(
    state: web::Data<HttpState>,
    payload: web::Json<AuthRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    let session = match request.action {
        Some(AuthAction::Register) => {
            let registration = Registration::try_from_parts(
                request.email.as_deref(),
                request.password.as_deref(),
                request.full_name.as_deref(),
                request.phone.as_deref(),
            )
            .map_err(|_| Error::invalid_request("Missing required fields"))?;
            state.auth.register(&registration).await?
        }
        Some(AuthAction::Login) => {
            let credentials = LoginCredentials::try_from_parts(
                request.email.as_deref(),
                request.password.as_deref(),
            )
            .map_err(|_| Error::invalid_request("Missing email or password"))?;
            state.auth.login(&credentials).await?
        }
        Some(AuthAction::Unknown) | None => return Err(Error::invalid_request("Invalid action")),
    };
    Ok(json_ok(&AuthResponse::from(session)))
}

/// CORS preflight for the auth endpoint.
#[utoipa::path(
    options,
    path = "/api/v1/auth",
    responses((status = 200, description = "Preflight accepted")),
    tags = ["auth"],
    operation_id = "authPreflight",
    security([])
)]
pub async fn preflight() -> HttpResponse {
    CORS.preflight()
}

/// Resource serving `/auth`.
pub fn resource() -> Resource {
    web::resource("/auth")
        .route(web::post().to(authenticate))
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(method_not_allowed))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{IdentityToken, UserId, UserProfile};
    use crate::inbound::http::test_utils::{TestPorts, body_json, call};
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn session(id: i32, email: &str) -> AuthSession {
        let id = UserId::new(id).expect("valid id");
        AuthSession::for_user(UserProfile::try_new(id, email, "Ada Lovelace").expect("profile"))
    }

    #[rstest]
    #[actix_web::test]
    async fn register_returns_token_and_user() {
        let mut ports = TestPorts::default();
        ports
            .auth
            .expect_register()
            .withf(|reg| reg.email() == "ada@example.com" && reg.phone().is_empty())
            .times(1)
            .return_once(|reg| Ok(session(1, reg.email())));

        let req = TestRequest::post().uri("/api/v1/auth").set_json(json!({
            "action": "register",
            "email": "ada@example.com",
            "password": "secret",
            "full_name": "Ada Lovelace"
        }));
        let res = call(ports, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = body_json(res).await;
        let token = IdentityToken::issue(UserId::new(1).expect("id"), "ada@example.com");
        assert_eq!(
            body,
            json!({
                "token": token.as_str(),
                "user": {"id": 1, "email": "ada@example.com", "full_name": "Ada Lovelace"}
            })
        );
    }

    #[rstest]
    #[case(json!({"action": "register", "email": "a@x.com", "password": "pw"}))]
    #[case(json!({"action": "register", "email": "", "password": "pw", "full_name": "A"}))]
    #[case(json!({"action": "register", "password": "pw", "full_name": "A"}))]
    #[actix_web::test]
    async fn register_requires_all_fields(#[case] payload: Value) {
        let req = TestRequest::post().uri("/api/v1/auth").set_json(payload);
        let res = call(TestPorts::default(), req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = body_json(res).await;
        assert_eq!(body, json!({"error": "Missing required fields"}));
    }

    #[rstest]
    #[case(json!({"action": "login", "email": "a@x.com"}))]
    #[case(json!({"action": "login", "password": "pw"}))]
    #[actix_web::test]
    async fn login_requires_email_and_password(#[case] payload: Value) {
        let req = TestRequest::post().uri("/api/v1/auth").set_json(payload);
        let res = call(TestPorts::default(), req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = body_json(res).await;
        assert_eq!(body, json!({"error": "Missing email or password"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn login_rejects_wrong_password() {
        let mut ports = TestPorts::default();
        ports
            .auth
            .expect_login()
            .times(1)
            .return_once(|_| Err(Error::unauthorized("Invalid credentials")));

        let req = TestRequest::post().uri("/api/v1/auth").set_json(json!({
            "action": "login", "email": "a@x.com", "password": "wrong"
        }));
        let res = call(ports, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = body_json(res).await;
        assert_eq!(body, json!({"error": "Invalid credentials"}));
    }

    #[rstest]
    #[case(json!({"action": "delete"}))]
    #[case(json!({"email": "a@x.com"}))]
    #[actix_web::test]
    async fn unknown_action_is_rejected(#[case] payload: Value) {
        let req = TestRequest::post().uri("/api/v1/auth").set_json(payload);
        let res = call(TestPorts::default(), req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = body_json(res).await;
        assert_eq!(body, json!({"error": "Invalid action"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn internal_failures_are_redacted() {
        let mut ports = TestPorts::default();
        ports
            .auth
            .expect_register()
            .return_once(|_| Err(Error::internal("duplicate key value violates users_email_key")));

        let req = TestRequest::post().uri("/api/v1/auth").set_json(json!({
            "action": "register", "email": "a@x.com", "password": "pw", "full_name": "A"
        }));
        let res = call(ports, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = body_json(res).await;
        assert_eq!(body, json!({"error": "Internal server error"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn get_is_not_allowed() {
        let res = call(TestPorts::default(), TestRequest::get().uri("/api/v1/auth")).await;

        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            res.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
        let body: Value = body_json(res).await;
        assert_eq!(body, json!({"error": "Method not allowed"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_json_is_rejected() {
        let req = TestRequest::post()
            .uri("/api/v1/auth")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json");
        let res = call(TestPorts::default(), req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = body_json(res).await;
        assert_eq!(body, json!({"error": "Invalid request body"}));
    }
}
