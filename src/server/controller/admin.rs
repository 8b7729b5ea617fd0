use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{GrantPackDto, PackGrantedDto, QuestsResetDto, ResetQuestsDto},
        api::{ApiResponse, ErrorDto},
        card::{CardTemplateResponseDto, CardTemplatesDto, CreateCardTemplateDto},
        leaderboard::WeeklyRewardsDto,
    },
    server::{
        error::AppError,
        middleware::auth::AdminGuard,
        model::{
            card::{CardTemplate, CreateCardTemplateParam},
            leaderboard::WeeklyReward,
            pack::PackType,
            quest::QuestType,
        },
        service::{
            admin::AdminService, card::CardService, leaderboard::LeaderboardService,
            quest::QuestService,
        },
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Grant a pack to an existing agent.
///
/// The agent receives a system notification about the pack.
///
/// # Access Control
/// - `Admin` - `Authorization: Bearer <admin key>`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the admin key
/// - `payload` - Moltbook ID of the agent and the pack type
///
/// # Returns
/// - `201 Created` - Pack granted
/// - `400 Bad Request` - Unknown pack type
/// - `401 Unauthorized` - Missing or invalid admin key
/// - `404 Not Found` - No agent with that Moltbook ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/packs",
    tag = ADMIN_TAG,
    request_body = GrantPackDto,
    responses(
        (status = 201, description = "Pack granted", body = PackGrantedDto),
        (status = 400, description = "Unknown pack type", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 404, description = "Agent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn grant_pack(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GrantPackDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.db, &headers).require().await?;

    let pack_type = PackType::parse(&payload.pack_type).ok_or_else(|| {
        AppError::bad_request(format!("Unknown pack type '{}'", payload.pack_type))
    })?;

    let pack = AdminService::new(&state.db)
        .grant_pack(&payload.agent_id, pack_type)
        .await?;

    let dto = PackGrantedDto {
        pack_id: pack.id,
        agent_id: payload.agent_id,
        pack_type: pack.pack_type.as_str().to_string(),
    };

    Ok((StatusCode::CREATED, Json(ApiResponse::new(dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/templates",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All card templates", body = CardTemplatesDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn get_templates(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.db, &headers).require().await?;

    let templates = CardService::new(&state.db).get_templates().await?;

    let dto = CardTemplatesDto {
        count: templates.len(),
        templates: templates.into_iter().map(CardTemplate::into_dto).collect(),
    };

    Ok((StatusCode::OK, Json(ApiResponse::new(dto))))
}

/// Add a card template to the pool packs draw from.
///
/// # Returns
/// - `201 Created` - Template created
/// - `400 Bad Request` - Blank name or negative stat
/// - `401 Unauthorized` - Missing or invalid admin key
#[utoipa::path(
    post,
    path = "/api/admin/templates",
    tag = ADMIN_TAG,
    request_body = CreateCardTemplateDto,
    responses(
        (status = 201, description = "Template created", body = CardTemplateResponseDto),
        (status = 400, description = "Invalid template", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn create_template(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCardTemplateDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.db, &headers).require().await?;

    let template = CardService::new(&state.db)
        .create_template(CreateCardTemplateParam::from_dto(payload))
        .await?;

    let dto = CardTemplateResponseDto {
        template: template.into_dto(),
    };

    Ok((StatusCode::CREATED, Json(ApiResponse::new(dto))))
}

/// Hand out this week's leaderboard rewards now.
///
/// Agents already rewarded for the current ISO week are skipped, so calling
/// this after the scheduled run only rewards newcomers to the top ten.
///
/// # Returns
/// - `200 OK` - Agents rewarded by this call
/// - `401 Unauthorized` - Missing or invalid admin key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/leaderboard/weekly-rewards",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Weekly rewards distributed", body = WeeklyRewardsDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn distribute_weekly_rewards(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.db, &headers).require().await?;

    let rewards = LeaderboardService::new(&state.db)
        .distribute_weekly_rewards()
        .await?;

    let dto = WeeklyRewardsDto {
        rewards_given: rewards.len(),
        rewards: rewards.into_iter().map(WeeklyReward::into_dto).collect(),
    };

    Ok((StatusCode::OK, Json(ApiResponse::new(dto))))
}

/// Clear every agent's progress on quests of one type.
///
/// # Returns
/// - `200 OK` - Number of progress rows removed
/// - `400 Bad Request` - `quest_type` is not `daily` or `weekly`
/// - `401 Unauthorized` - Missing or invalid admin key
#[utoipa::path(
    post,
    path = "/api/admin/quests/reset",
    tag = ADMIN_TAG,
    request_body = ResetQuestsDto,
    responses(
        (status = 200, description = "Quest progress reset", body = QuestsResetDto),
        (status = 400, description = "Unknown quest type", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn reset_quests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ResetQuestsDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state.db, &headers).require().await?;

    let quest_type = QuestType::parse(&payload.quest_type).ok_or_else(|| {
        AppError::bad_request(format!("Unknown quest type '{}'", payload.quest_type))
    })?;

    let reset = QuestService::new(&state.db).reset(quest_type).await?;

    let dto = QuestsResetDto {
        quest_type: quest_type.as_str().to_string(),
        reset,
    };

    Ok((StatusCode::OK, Json(ApiResponse::new(dto))))
}
