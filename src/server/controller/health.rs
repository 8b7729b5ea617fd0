use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::{ApiResponse, HealthDto};

pub static HEALTH_TAG: &str = "health";

/// Liveness check. Requires no identity.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::new(HealthDto {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })),
    )
}
