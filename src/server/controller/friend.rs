use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, StatusMessageDto},
        friend::{FriendRequestCreatedDto, FriendRequestsDto, FriendsDto, SendFriendRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::AgentGuard,
        model::friend::{Friend, FriendRequest},
        service::friend::FriendService,
        state::AppState,
    },
};

/// Tag for grouping friend endpoints in OpenAPI documentation
pub static FRIEND_TAG: &str = "friend";

/// List the caller's friends by name.
#[utoipa::path(
    get,
    path = "/api/friends",
    tag = FRIEND_TAG,
    responses(
        (status = 200, description = "Accepted friends", body = FriendsDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let friends = FriendService::new(&state.db).list(&caller.agent.id).await?;

    let dto = FriendsDto {
        count: friends.len(),
        friends: friends.into_iter().map(Friend::into_dto).collect(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

/// Send a friend request.
///
/// # Access Control
/// - `Agent` - Identified by the `X-Agent-Id` header
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the agent identity
/// - `payload` - Moltbook ID of the agent to befriend
///
/// # Returns
/// - `201 Created` - Pending friend request
/// - `400 Bad Request` - Request to yourself
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `409 Conflict` - Already friends or a request is pending
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/friends",
    tag = FRIEND_TAG,
    request_body = SendFriendRequestDto,
    responses(
        (status = 201, description = "Friend request sent", body = FriendRequestCreatedDto),
        (status = 400, description = "Invalid friend request", body = ErrorDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 409, description = "Already friends or request pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SendFriendRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let friendship = FriendService::new(&state.db)
        .send_request(&caller.agent, &payload.friend_id)
        .await?;

    let dto = FriendRequestCreatedDto {
        friendship_id: friendship.id,
        message: format!("Friend request sent to {}", payload.friend_id),
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

/// Remove a friend in either direction.
///
/// # Arguments
/// - `friend_agent_id` - Internal agent ID, as listed by `GET /api/friends`
///
/// # Returns
/// - `200 OK` - Friendship removed
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `404 Not Found` - No relation with that agent
#[utoipa::path(
    delete,
    path = "/api/friends/{friend_agent_id}",
    tag = FRIEND_TAG,
    params(
        ("friend_agent_id" = String, Path, description = "Internal agent ID of the friend")
    ),
    responses(
        (status = 200, description = "Friend removed", body = StatusMessageDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Friendship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(friend_agent_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    FriendService::new(&state.db)
        .remove(&caller.agent.id, &friend_agent_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(StatusMessageDto::new("Friend removed"))
                .with_daily_login(caller.daily_login),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/friends/requests/incoming",
    tag = FRIEND_TAG,
    responses(
        (status = 200, description = "Pending requests sent to the caller", body = FriendRequestsDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn incoming(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let requests = FriendService::new(&state.db)
        .incoming(&caller.agent.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(requests_dto(requests)).with_daily_login(caller.daily_login)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/friends/requests/outgoing",
    tag = FRIEND_TAG,
    responses(
        (status = 200, description = "Pending requests sent by the caller", body = FriendRequestsDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn outgoing(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let requests = FriendService::new(&state.db)
        .outgoing(&caller.agent.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(requests_dto(requests)).with_daily_login(caller.daily_login)),
    ))
}

/// Accept a pending friend request addressed to the caller.
///
/// # Returns
/// - `200 OK` - Request accepted; the sender is notified
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `404 Not Found` - No pending request with that ID for the caller
#[utoipa::path(
    post,
    path = "/api/friends/requests/{friendship_id}/accept",
    tag = FRIEND_TAG,
    params(
        ("friendship_id" = String, Path, description = "Friendship ID")
    ),
    responses(
        (status = 200, description = "Friend request accepted", body = StatusMessageDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Friend request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(friendship_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    FriendService::new(&state.db)
        .accept(&caller.agent, &friendship_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(StatusMessageDto::new("Friend request accepted"))
                .with_daily_login(caller.daily_login),
        ),
    ))
}

#[utoipa::path(
    post,
    path = "/api/friends/requests/{friendship_id}/decline",
    tag = FRIEND_TAG,
    params(
        ("friendship_id" = String, Path, description = "Friendship ID")
    ),
    responses(
        (status = 200, description = "Friend request declined", body = StatusMessageDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Friend request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decline(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(friendship_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    FriendService::new(&state.db)
        .decline(&caller.agent.id, &friendship_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(StatusMessageDto::new("Friend request declined"))
                .with_daily_login(caller.daily_login),
        ),
    ))
}

fn requests_dto(requests: Vec<FriendRequest>) -> FriendRequestsDto {
    FriendRequestsDto {
        count: requests.len(),
        requests: requests.into_iter().map(FriendRequest::into_dto).collect(),
    }
}
