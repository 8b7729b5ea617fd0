use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, StatusMessageDto},
        battle::{AcceptBattleDto, BattleAcceptedDto, BattleCreatedDto, ChallengeBattleDto},
    },
    server::{
        error::AppError, middleware::auth::AgentGuard, service::battle::BattleService,
        state::AppState,
    },
};

/// Tag for grouping battle endpoints in OpenAPI documentation
pub static BATTLE_TAG: &str = "battle";

/// Challenge another agent to a battle.
///
/// The opponent is registered on first sight and notified of the challenge.
///
/// # Access Control
/// - `Agent` - Must own the card put forward
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the agent identity
/// - `payload` - Opponent Moltbook ID and the challenger's card
///
/// # Returns
/// - `201 Created` - Pending battle
/// - `400 Bad Request` - Card not owned, or challenging yourself
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/battles",
    tag = BATTLE_TAG,
    request_body = ChallengeBattleDto,
    responses(
        (status = 201, description = "Battle challenge created", body = BattleCreatedDto),
        (status = 400, description = "Card not owned or invalid opponent", body = ErrorDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn challenge(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChallengeBattleDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let battle = BattleService::new(&state.db)
        .challenge(&caller.agent, &payload.opponent_id, &payload.card_id)
        .await?;

    let dto = BattleCreatedDto {
        battle_id: battle.id,
        message: format!("Battle challenge sent to {}", payload.opponent_id),
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

/// Accept a pending battle and fight it out.
///
/// Each side's power is its card's total power plus a random roll. The higher
/// power wins and equal power is a draw. Every third win earns the winner a
/// premium pack, reported in `pack_reward`.
///
/// # Access Control
/// - `Agent` - Must be the defender and own the card put forward
///
/// # Returns
/// - `200 OK` - Battle result
/// - `400 Bad Request` - Defender does not own the card
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `404 Not Found` - Battle missing, not pending or not addressed to the caller
/// - `409 Conflict` - Challenger no longer owns their card
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/battles/{battle_id}/accept",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = String, Path, description = "Battle ID")
    ),
    request_body = AcceptBattleDto,
    responses(
        (status = 200, description = "Battle resolved", body = BattleAcceptedDto),
        (status = 400, description = "Card not owned", body = ErrorDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Battle not found or not pending", body = ErrorDto),
        (status = 409, description = "Challenger card no longer owned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(battle_id): Path<String>,
    Json(payload): Json<AcceptBattleDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let result = BattleService::new(&state.db)
        .accept(&caller.agent, &battle_id, &payload.card_id)
        .await?;

    let (battle, pack_reward) = result.into_dto();
    let dto = BattleAcceptedDto {
        battle,
        pack_reward,
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

/// Decline a pending battle addressed to the caller.
#[utoipa::path(
    post,
    path = "/api/battles/{battle_id}/decline",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = String, Path, description = "Battle ID")
    ),
    responses(
        (status = 200, description = "Battle declined", body = StatusMessageDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Battle not found or not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decline(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(battle_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    BattleService::new(&state.db)
        .decline(&caller.agent.id, &battle_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(StatusMessageDto::new("Battle declined"))
                .with_daily_login(caller.daily_login),
        ),
    ))
}
