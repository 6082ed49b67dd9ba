//! Service catalogue handler.
//!
//! ```text
//! OPTIONS /api/v1/services
//! GET     /api/v1/services
//! ```

use actix_web::{HttpResponse, Resource, http::Method, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ClinicService;
use crate::inbound::http::ApiResult;
use crate::inbound::http::cors::{CorsPolicy, json_ok};
use crate::inbound::http::error::{ErrorBody, method_not_allowed};
use crate::inbound::http::state::HttpState;

const CORS: CorsPolicy = CorsPolicy::READ_ONLY;

/// Catalogue entry offered to patients when booking.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClinicServiceBody {
    pub id: i32,
    #[schema(example = "General consultation")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "1500")]
    pub price: Option<String>,
    #[schema(example = 30)]
    pub duration_minutes: Option<i32>,
}

impl From<ClinicService> for ClinicServiceBody {
    fn from(service: ClinicService) -> Self {
        Self {
            id: service.id.get(),
            title: service.title,
            description: service.description,
            price: service.price,
            duration_minutes: service.duration_minutes,
        }
    }
}

/// List every catalogue service ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/services",
    responses(
        (status = 200, description = "Catalogue services", body = [ClinicServiceBody]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["services"],
    operation_id = "listServices",
    security([])
)]
pub async fn list_services(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let services = state.services.list_services().await?;
    let body: Vec<ClinicServiceBody> = services.into_iter().map(Into::into).collect();
    Ok(json_ok(&body))
}

#[utoipa::path(
    options,
    path = "/api/v1/services",
    responses((status = 200, description = "Preflight accepted")),
    tags = ["services"],
    operation_id = "servicesPreflight",
    security([])
)]
pub async fn preflight() -> HttpResponse {
    CORS.preflight()
}

/// Resource serving `/services`.
pub fn resource() -> Resource {
    web::resource("/services")
        .route(web::get().to(list_services))
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(method_not_allowed))
}
