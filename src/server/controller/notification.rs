use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, StatusMessageDto},
        notification::{MarkedReadDto, NotificationsDto, NotificationsQuery, UnreadCountDto},
    },
    server::{
        error::AppError, middleware::auth::AgentGuard, model::notification::Notification,
        service::notification::NotificationService, state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List the caller's notifications, newest first.
///
/// Only unread notifications are returned unless `include_read=true`.
///
/// # Returns
/// - `200 OK` - Notifications and their count
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(NotificationsQuery),
    responses(
        (status = 200, description = "Notifications", body = NotificationsDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NotificationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let notifications = NotificationService::new(&state.db)
        .list(&caller.agent.id, query.include_read)
        .await?;

    let dto = NotificationsDto {
        count: notifications.len(),
        notifications: notifications
            .into_iter()
            .map(Notification::into_dto)
            .collect(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Unread notification count", body = UnreadCountDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unread_count(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let unread_count = NotificationService::new(&state.db)
        .unread_count(&caller.agent.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(UnreadCountDto { unread_count })
                .with_daily_login(caller.daily_login),
        ),
    ))
}

/// Mark one of the caller's notifications as read.
///
/// # Returns
/// - `200 OK` - Notification marked read
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `404 Not Found` - Notification missing or addressed to another agent
#[utoipa::path(
    post,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = String, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = StatusMessageDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(notification_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    NotificationService::new(&state.db)
        .mark_read(&notification_id, &caller.agent.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(StatusMessageDto::new("Notification marked as read"))
                .with_daily_login(caller.daily_login),
        ),
    ))
}

#[utoipa::path(
    post,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Number of notifications marked read", body = MarkedReadDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let marked_read = NotificationService::new(&state.db)
        .mark_all_read(&caller.agent.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(MarkedReadDto { marked_read }).with_daily_login(caller.daily_login)),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{notification_id}",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = String, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification deleted", body = StatusMessageDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(notification_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    NotificationService::new(&state.db)
        .delete(&notification_id, &caller.agent.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(StatusMessageDto::new("Notification deleted"))
                .with_daily_login(caller.daily_login),
        ),
    ))
}
