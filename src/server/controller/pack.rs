use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        pack::{OpenedPackDto, PacksDto},
    },
    server::{
        error::AppError, middleware::auth::AgentGuard, model::pack::Pack,
        service::pack::PackService, state::AppState,
    },
};

/// Tag for grouping pack endpoints in OpenAPI documentation
pub static PACK_TAG: &str = "pack";

/// List the calling agent's unopened packs, newest first.
///
/// # Access Control
/// - `Agent` - Identified by the `X-Agent-Id` header
///
/// # Returns
/// - `200 OK` - Unopened packs and their count
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/packs",
    tag = PACK_TAG,
    responses(
        (status = 200, description = "Unopened packs", body = PacksDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_packs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let packs = PackService::new(&state.db)
        .get_packs(&caller.agent.id)
        .await?;

    let dto = PacksDto {
        count: packs.len(),
        packs: packs.into_iter().map(Pack::into_dto).collect(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

/// Open one of the calling agent's packs.
///
/// Draws five cards using the pack type's rarity weights and adds them to the
/// agent's collection.
///
/// # Access Control
/// - `Agent` - Must own the pack
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the agent identity
/// - `pack_id` - Pack to open
///
/// # Returns
/// - `200 OK` - The minted cards
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `404 Not Found` - Pack missing or owned by another agent
/// - `409 Conflict` - Pack already opened
/// - `500 Internal Server Error` - Database error or no card templates
#[utoipa::path(
    post,
    path = "/api/packs/{pack_id}/open",
    tag = PACK_TAG,
    params(
        ("pack_id" = String, Path, description = "Pack ID")
    ),
    responses(
        (status = 200, description = "Pack opened", body = OpenedPackDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Pack not found", body = ErrorDto),
        (status = 409, description = "Pack already opened", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn open_pack(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(pack_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let opened = PackService::new(&state.db)
        .open_pack(&caller.agent.id, &pack_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(opened.into_dto()).with_daily_login(caller.daily_login)),
    ))
}
