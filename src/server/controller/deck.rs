use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, StatusMessageDto},
        deck::{
            CreateDeckDto, DeckCreatedDto, DeckDetailDto, DeckUpdatedDto, DecksDto, UpdateDeckDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AgentGuard, model::deck::Deck,
        service::deck::DeckService, state::AppState,
    },
};

/// Tag for grouping deck endpoints in OpenAPI documentation
pub static DECK_TAG: &str = "deck";

/// List the caller's decks, newest first.
#[utoipa::path(
    get,
    path = "/api/decks",
    tag = DECK_TAG,
    responses(
        (status = 200, description = "Agent's decks", body = DecksDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let decks = DeckService::new(&state.db).list(&caller.agent.id).await?;

    let dto = DecksDto {
        count: decks.len(),
        decks: decks.into_iter().map(Deck::into_dto).collect(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

/// Create an empty deck.
///
/// # Access Control
/// - `Agent` - Identified by the `X-Agent-Id` header
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the agent identity
/// - `payload` - Deck name and optional description
///
/// # Returns
/// - `201 Created` - New deck
/// - `400 Bad Request` - Blank name or the agent already has 10 decks
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/decks",
    tag = DECK_TAG,
    request_body = CreateDeckDto,
    responses(
        (status = 201, description = "Deck created", body = DeckCreatedDto),
        (status = 400, description = "Invalid deck or deck limit reached", body = ErrorDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDeckDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let deck = DeckService::new(&state.db)
        .create(
            &caller.agent.id,
            &payload.name,
            payload.description.as_deref(),
        )
        .await?;

    let dto = DeckCreatedDto {
        message: format!("Deck '{}' created", deck.name),
        deck_id: deck.id,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

/// Get the caller's active deck with its cards.
///
/// # Returns
/// - `200 OK` - Active deck
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `404 Not Found` - No active deck set
#[utoipa::path(
    get,
    path = "/api/decks/active",
    tag = DECK_TAG,
    responses(
        (status = 200, description = "Active deck", body = DeckDetailDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "No active deck set", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let deck = DeckService::new(&state.db)
        .get_active(&caller.agent.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(deck.into_dto()).with_daily_login(caller.daily_login)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/decks/{deck_id}",
    tag = DECK_TAG,
    params(
        ("deck_id" = String, Path, description = "Deck ID")
    ),
    responses(
        (status = 200, description = "Deck with its cards", body = DeckDetailDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(deck_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let deck = DeckService::new(&state.db)
        .get(&caller.agent.id, &deck_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(deck.into_dto()).with_daily_login(caller.daily_login)),
    ))
}

/// Replace a deck's card list.
///
/// # Access Control
/// - `Agent` - Must own the deck and every listed card
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the agent identity
/// - `deck_id` - Deck to update
/// - `payload` - The full new list of card IDs
///
/// # Returns
/// - `200 OK` - Deck updated
/// - `400 Bad Request` - A card is not in the caller's collection
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `404 Not Found` - Deck missing or owned by another agent
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/decks/{deck_id}",
    tag = DECK_TAG,
    params(
        ("deck_id" = String, Path, description = "Deck ID")
    ),
    request_body = UpdateDeckDto,
    responses(
        (status = 200, description = "Deck updated", body = DeckUpdatedDto),
        (status = 400, description = "Card not in collection", body = ErrorDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(deck_id): Path<String>,
    Json(payload): Json<UpdateDeckDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let card_count = DeckService::new(&state.db)
        .update(&caller.agent.id, &deck_id, payload.card_ids)
        .await?;

    let dto = DeckUpdatedDto {
        deck_id,
        card_count,
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/decks/{deck_id}",
    tag = DECK_TAG,
    params(
        ("deck_id" = String, Path, description = "Deck ID")
    ),
    responses(
        (status = 200, description = "Deck deleted", body = StatusMessageDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(deck_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    DeckService::new(&state.db)
        .delete(&caller.agent.id, &deck_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(StatusMessageDto::new("Deck deleted"))
                .with_daily_login(caller.daily_login),
        ),
    ))
}

/// Make a deck the caller's only active deck.
#[utoipa::path(
    post,
    path = "/api/decks/{deck_id}/activate",
    tag = DECK_TAG,
    params(
        ("deck_id" = String, Path, description = "Deck ID")
    ),
    responses(
        (status = 200, description = "Deck activated", body = StatusMessageDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_active(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(deck_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    DeckService::new(&state.db)
        .set_active(&caller.agent.id, &deck_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(StatusMessageDto::new("Active deck set"))
                .with_daily_login(caller.daily_login),
        ),
    ))
}
