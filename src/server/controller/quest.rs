use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        quest::{AgentQuestsDto, QuestCompletedDto, QuestStartedDto, QuestsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AgentGuard,
        model::quest::{AgentQuest, Quest},
        service::quest::QuestService,
        state::AppState,
    },
};

/// Tag for grouping quest endpoints in OpenAPI documentation
pub static QUEST_TAG: &str = "quest";

#[utoipa::path(
    get,
    path = "/api/quests",
    tag = QUEST_TAG,
    responses(
        (status = 200, description = "All quests", body = QuestsDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn all(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let quests = QuestService::new(&state.db).all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(quests_dto(quests)).with_daily_login(caller.daily_login)),
    ))
}

/// Quests the caller has not started, or whose progress was reset.
#[utoipa::path(
    get,
    path = "/api/quests/available",
    tag = QUEST_TAG,
    responses(
        (status = 200, description = "Quests that can be started", body = QuestsDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn available(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let quests = QuestService::new(&state.db)
        .available(&caller.agent.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(quests_dto(quests)).with_daily_login(caller.daily_login)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/quests/active",
    tag = QUEST_TAG,
    responses(
        (status = 200, description = "Quests in progress", body = AgentQuestsDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn active(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let quests = QuestService::new(&state.db)
        .active(&caller.agent.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(agent_quests_dto(quests)).with_daily_login(caller.daily_login)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/quests/completed",
    tag = QUEST_TAG,
    responses(
        (status = 200, description = "Completed quests", body = AgentQuestsDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn completed(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let quests = QuestService::new(&state.db)
        .completed(&caller.agent.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(agent_quests_dto(quests)).with_daily_login(caller.daily_login)),
    ))
}

/// Start tracking progress on a quest.
///
/// Progress is only counted for started quests.
///
/// # Access Control
/// - `Agent` - Identified by the `X-Agent-Id` header
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the agent identity
/// - `quest_id` - Quest to start
///
/// # Returns
/// - `201 Created` - Quest started
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `404 Not Found` - Unknown quest
/// - `409 Conflict` - Quest already started
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/quests/{quest_id}/start",
    tag = QUEST_TAG,
    params(
        ("quest_id" = String, Path, description = "Quest ID")
    ),
    responses(
        (status = 201, description = "Quest started", body = QuestStartedDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Quest not found", body = ErrorDto),
        (status = 409, description = "Quest already started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(quest_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let agent_quest = QuestService::new(&state.db)
        .start(&caller.agent.id, &quest_id)
        .await?;

    let dto = QuestStartedDto {
        message: format!("Quest '{}' started", agent_quest.quest.name),
        agent_quest_id: agent_quest.id,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

/// Claim a quest whose target has been reached.
///
/// # Returns
/// - `200 OK` - Quest completed and its reward granted
/// - `400 Bad Request` - Progress below target
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `404 Not Found` - No such started quest for the caller
/// - `409 Conflict` - Already completed
#[utoipa::path(
    post,
    path = "/api/agent-quests/{agent_quest_id}/complete",
    tag = QUEST_TAG,
    params(
        ("agent_quest_id" = String, Path, description = "ID returned when the quest was started")
    ),
    responses(
        (status = 200, description = "Quest completed", body = QuestCompletedDto),
        (status = 400, description = "Quest target not reached", body = ErrorDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Quest not found", body = ErrorDto),
        (status = 409, description = "Quest already completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(agent_quest_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let agent_quest = QuestService::new(&state.db)
        .complete(&caller.agent.id, &agent_quest_id)
        .await?;

    let dto = QuestCompletedDto {
        quest: agent_quest.quest.name,
        reward: agent_quest.quest.reward.into_dto(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

fn quests_dto(quests: Vec<Quest>) -> QuestsDto {
    QuestsDto {
        count: quests.len(),
        quests: quests.into_iter().map(Quest::into_dto).collect(),
    }
}

fn agent_quests_dto(quests: Vec<AgentQuest>) -> AgentQuestsDto {
    AgentQuestsDto {
        count: quests.len(),
        quests: quests.into_iter().map(AgentQuest::into_dto).collect(),
    }
}
