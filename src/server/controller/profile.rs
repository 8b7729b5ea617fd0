use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        agent::ProfileResponseDto,
        api::{ApiResponse, ErrorDto},
        battle::BattleHistoryDto,
        message::LimitQuery,
        trade::TradeHistoryDto,
    },
    server::{
        error::AppError,
        middleware::auth::AgentGuard,
        model::{battle::BattleHistoryEntry, trade::TradeHistoryEntry},
        service::profile::{ProfileService, HISTORY_LIMIT},
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Get the calling agent's profile.
///
/// Combines the agent record with its stats and live card and friend counts.
///
/// # Access Control
/// - `Agent` - Identified by the `X-Agent-Id` header
///
/// # Returns
/// - `200 OK` - Agent profile
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Agent profile", body = ProfileResponseDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let profile = ProfileService::new(&state.db)
        .get_profile(&caller.agent.id)
        .await?;

    let dto = ProfileResponseDto {
        profile: profile.into_dto(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

/// Completed battles the caller fought, newest first.
///
/// # Arguments
/// - `query` - Optional `limit`, default 20, at most 100
#[utoipa::path(
    get,
    path = "/api/profile/battles",
    tag = PROFILE_TAG,
    params(LimitQuery),
    responses(
        (status = 200, description = "Battle history", body = BattleHistoryDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_battle_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let battles = ProfileService::new(&state.db)
        .get_battle_history(&caller.agent.id, query.limit.unwrap_or(HISTORY_LIMIT))
        .await?;

    let dto = BattleHistoryDto {
        count: battles.len(),
        battles: battles
            .into_iter()
            .map(BattleHistoryEntry::into_dto)
            .collect(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

/// Accepted and declined trades involving the caller, most recently resolved first.
///
/// # Arguments
/// - `query` - Optional `limit`, default 20, at most 100
#[utoipa::path(
    get,
    path = "/api/profile/trades",
    tag = PROFILE_TAG,
    params(LimitQuery),
    responses(
        (status = 200, description = "Trade history", body = TradeHistoryDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trade_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let trades = ProfileService::new(&state.db)
        .get_trade_history(&caller.agent.id, query.limit.unwrap_or(HISTORY_LIMIT))
        .await?;

    let dto = TradeHistoryDto {
        count: trades.len(),
        trades: trades.into_iter().map(TradeHistoryEntry::into_dto).collect(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}
