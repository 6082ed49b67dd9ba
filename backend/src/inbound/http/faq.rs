//! FAQ handler.
//!
//! ```text
//! OPTIONS /api/v1/faq
//! GET     /api/v1/faq
//! ```

use actix_web::{HttpResponse, Resource, http::Method, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::FaqEntry;
use crate::inbound::http::ApiResult;
use crate::inbound::http::cors::{CorsPolicy, json_ok};
use crate::inbound::http::error::{ErrorBody, method_not_allowed};
use crate::inbound::http::state::HttpState;

const CORS: CorsPolicy = CorsPolicy::READ_ONLY;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FaqEntryBody {
    pub id: i32,
    #[schema(example = "Do I need a referral?")]
    pub question: String,
    pub answer: String,
    #[schema(example = "Appointments")]
    pub category: String,
}

impl From<FaqEntry> for FaqEntryBody {
    fn from(entry: FaqEntry) -> Self {
        Self {
            id: entry.id,
            question: entry.question,
            answer: entry.answer,
            category: entry.category,
        }
    }
}

/// List FAQ entries grouped by category.
#[utoipa::path(
    get,
    path = "/api/v1/faq",
    responses(
        (status = 200, description = "FAQ entries ordered by category then id", body = [FaqEntryBody]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["faq"],
    operation_id = "listFaq",
    security([])
)]
pub async fn list_faq(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let entries = state.faq.list_faq().await?;
    let body: Vec<FaqEntryBody> = entries.into_iter().map(FaqEntryBody::from).collect();
    Ok(json_ok(&body))
}

#[utoipa::path(
    options,
    path = "/api/v1/faq",
    responses((status = 200, description = "Preflight accepted")),
    tags = ["faq"],
    operation_id = "faqPreflight",
    security([])
)]
pub async fn preflight() -> HttpResponse {
    CORS.preflight()
}

/// Resource serving `/faq`.
pub fn resource() -> Resource {
    web::resource("/faq")
        .route(web::get().to(list_faq))
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(method_not_allowed))
}
