use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        card::{CardResponseDto, CollectionDto},
    },
    server::{
        error::AppError, middleware::auth::AgentGuard, model::card::Card,
        service::card::CardService, state::AppState,
    },
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

/// Get the calling agent's card collection.
///
/// Cards are ordered by template name, then mint number, and each carries its
/// computed `total_power`.
///
/// # Access Control
/// - `Agent` - Identified by the `X-Agent-Id` header
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the agent identity
///
/// # Returns
/// - `200 OK` - Owned cards and their count
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/collection",
    tag = CARD_TAG,
    responses(
        (status = 200, description = "Agent's card collection", body = CollectionDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_collection(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let cards = CardService::new(&state.db)
        .get_collection(&caller.agent.id)
        .await?;

    let dto = CollectionDto {
        count: cards.len(),
        cards: cards.into_iter().map(Card::into_dto).collect(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

/// Get a single card by ID, whoever owns it.
///
/// # Returns
/// - `200 OK` - Card with its total power
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `404 Not Found` - No card with that ID
#[utoipa::path(
    get,
    path = "/api/cards/{card_id}",
    tag = CARD_TAG,
    params(
        ("card_id" = String, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Card details", body = CardResponseDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(card_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let card = CardService::new(&state.db).get_card(&card_id).await?;

    let dto = CardResponseDto {
        card: card.into_dto(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}
