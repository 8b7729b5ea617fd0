use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        leaderboard::{LeaderboardDto, LeaderboardQuery},
    },
    server::{
        error::AppError,
        middleware::auth::AgentGuard,
        model::leaderboard::{LeaderboardEntry, LeaderboardSort},
        service::leaderboard::LeaderboardService,
        state::AppState,
    },
};

/// Tag for grouping leaderboard endpoints in OpenAPI documentation
pub static LEADERBOARD_TAG: &str = "leaderboard";

/// Get the top ten agents.
///
/// `sort_by` accepts `elo` (default), `wins` or `cards`; any other value falls
/// back to `elo`.
///
/// # Returns
/// - `200 OK` - Ranked entries
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = LEADERBOARD_TAG,
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Leaderboard", body = LeaderboardDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LeaderboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let sort = LeaderboardSort::from_query(query.sort_by.as_deref());
    let entries = LeaderboardService::new(&state.db)
        .get_leaderboard(sort)
        .await?;

    let dto = LeaderboardDto {
        sort_by: sort.as_str().to_string(),
        leaderboard: entries.into_iter().map(LeaderboardEntry::into_dto).collect(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}
