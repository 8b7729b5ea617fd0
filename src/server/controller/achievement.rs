use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        achievement::{AchievementCheckDto, AchievementsDto, EarnedAchievementsDto},
        api::{ApiResponse, ErrorDto},
    },
    server::{
        error::AppError,
        middleware::auth::AgentGuard,
        model::achievement::{Achievement, EarnedAchievement},
        service::achievement::AchievementService,
        state::AppState,
    },
};

/// Tag for grouping achievement endpoints in OpenAPI documentation
pub static ACHIEVEMENT_TAG: &str = "achievement";

/// Every achievement, by category then name.
#[utoipa::path(
    get,
    path = "/api/achievements",
    tag = ACHIEVEMENT_TAG,
    responses(
        (status = 200, description = "All achievements", body = AchievementsDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn all(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let achievements = AchievementService::new(&state.db).all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(achievements_dto(achievements)).with_daily_login(caller.daily_login)),
    ))
}

/// Achievements the caller has unlocked, newest first.
#[utoipa::path(
    get,
    path = "/api/achievements/earned",
    tag = ACHIEVEMENT_TAG,
    responses(
        (status = 200, description = "Earned achievements", body = EarnedAchievementsDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn earned(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let earned = AchievementService::new(&state.db)
        .earned(&caller.agent.id)
        .await?;

    let dto = EarnedAchievementsDto {
        count: earned.len(),
        achievements: earned.into_iter().map(EarnedAchievement::into_dto).collect(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/achievements/available",
    tag = ACHIEVEMENT_TAG,
    responses(
        (status = 200, description = "Achievements not yet earned", body = AchievementsDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn available(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let achievements = AchievementService::new(&state.db)
        .available(&caller.agent.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(achievements_dto(achievements)).with_daily_login(caller.daily_login)),
    ))
}

/// Evaluate the caller's stats and unlock any achievements now met.
///
/// Rewards for unlocked achievements are granted immediately.
///
/// # Access Control
/// - `Agent` - Identified by the `X-Agent-Id` header
///
/// # Returns
/// - `200 OK` - Names of the achievements unlocked by this check
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/achievements/check",
    tag = ACHIEVEMENT_TAG,
    responses(
        (status = 200, description = "Newly unlocked achievements", body = AchievementCheckDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let unlocked = AchievementService::new(&state.db)
        .check(&caller.agent.id)
        .await?;

    let dto = AchievementCheckDto {
        count: unlocked.len(),
        unlocked,
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

fn achievements_dto(achievements: Vec<Achievement>) -> AchievementsDto {
    AchievementsDto {
        count: achievements.len(),
        achievements: achievements.into_iter().map(Achievement::into_dto).collect(),
    }
}
