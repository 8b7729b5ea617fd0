use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, StatusMessageDto},
        trade::{CreateTradeDto, TradeCreatedDto},
    },
    server::{
        error::AppError, middleware::auth::AgentGuard, service::trade::TradeService,
        state::AppState,
    },
};

/// Tag for grouping trade endpoints in OpenAPI documentation
pub static TRADE_TAG: &str = "trade";

/// Offer a card trade to another agent.
///
/// # Access Control
/// - `Agent` - Must own every offered card
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the agent identity
/// - `payload` - Recipient Moltbook ID, offered card IDs and wanted card IDs
///
/// # Returns
/// - `201 Created` - Pending trade
/// - `400 Bad Request` - Offered card not owned, empty offer, repeated card or self-trade
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trades",
    tag = TRADE_TAG,
    request_body = CreateTradeDto,
    responses(
        (status = 201, description = "Trade offer created", body = TradeCreatedDto),
        (status = 400, description = "Invalid trade offer", body = ErrorDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTradeDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let trade = TradeService::new(&state.db)
        .request(&caller.agent, &payload.to_agent, payload.offer, payload.want)
        .await?;

    let dto = TradeCreatedDto {
        trade_id: trade.id,
        message: format!("Trade offer sent to {}", payload.to_agent),
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

/// Accept a pending trade addressed to the caller.
///
/// Both sides' cards are re-checked and swapped in one transaction.
///
/// # Returns
/// - `200 OK` - Trade accepted
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `404 Not Found` - Trade missing, resolved or not addressed to the caller
/// - `409 Conflict` - A card involved changed hands since the offer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trades/{trade_id}/accept",
    tag = TRADE_TAG,
    params(
        ("trade_id" = String, Path, description = "Trade ID")
    ),
    responses(
        (status = 200, description = "Trade accepted", body = StatusMessageDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Trade not found or not pending", body = ErrorDto),
        (status = 409, description = "Card ownership changed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(trade_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    TradeService::new(&state.db)
        .accept(&caller.agent, &trade_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(StatusMessageDto::new("Trade accepted"))
                .with_daily_login(caller.daily_login),
        ),
    ))
}

#[utoipa::path(
    post,
    path = "/api/trades/{trade_id}/decline",
    tag = TRADE_TAG,
    params(
        ("trade_id" = String, Path, description = "Trade ID")
    ),
    responses(
        (status = 200, description = "Trade declined", body = StatusMessageDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Trade not found or not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decline(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(trade_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    TradeService::new(&state.db)
        .decline(&caller.agent.id, &trade_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(StatusMessageDto::new("Trade declined"))
                .with_daily_login(caller.daily_login),
        ),
    ))
}
