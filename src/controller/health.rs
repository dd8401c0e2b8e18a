use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::dto::api::MessageDto;

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness check.
///
/// Always returns 200 once the server is up; used by load balancers and
/// uptime monitors.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Service is running
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = MessageDto)
    ),
)]
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto::new(StatusCode::OK, "MidCity API is running")),
    )
}
