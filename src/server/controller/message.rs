use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, StatusMessageDto},
        message::{
            ConversationDto, ConversationsDto, LimitQuery, MessageSentDto, SendMessageDto,
        },
        notification::UnreadCountDto,
    },
    server::{
        error::AppError,
        middleware::auth::AgentGuard,
        model::message::ConversationSummary,
        service::message::{MessageService, CONVERSATION_LIMIT, RECENT_CONVERSATIONS_LIMIT},
        state::AppState,
    },
};

/// Tag for grouping message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// Send a direct message to another agent.
///
/// No friendship is required. The recipient gets a notification with a short
/// preview of the text.
///
/// # Access Control
/// - `Agent` - Identified by the `X-Agent-Id` header
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the agent identity
/// - `payload` - Recipient Moltbook ID and message text
///
/// # Returns
/// - `201 Created` - Message stored
/// - `400 Bad Request` - Empty text or message to yourself
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = MessageSentDto),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let message = MessageService::new(&state.db)
        .send(&caller.agent, &payload.recipient_id, &payload.message)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::new(MessageSentDto {
                message_id: message.id,
            })
            .with_daily_login(caller.daily_login),
        ),
    ))
}

/// Most recent conversations, one per counterpart, newest first.
///
/// # Arguments
/// - `query` - Optional `limit`, default 10
#[utoipa::path(
    get,
    path = "/api/messages/conversations",
    tag = MESSAGE_TAG,
    params(LimitQuery),
    responses(
        (status = 200, description = "Conversation summaries", body = ConversationsDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recent_conversations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let conversations = MessageService::new(&state.db)
        .recent_conversations(
            &caller.agent.id,
            query.limit.unwrap_or(RECENT_CONVERSATIONS_LIMIT),
        )
        .await?;

    let dto = ConversationsDto {
        count: conversations.len(),
        conversations: conversations
            .into_iter()
            .map(ConversationSummary::into_dto)
            .collect(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

/// Messages exchanged with one agent, oldest first.
///
/// # Arguments
/// - `other_agent_id` - Internal agent ID of the counterpart
/// - `query` - Optional `limit` on the most recent messages, default 50, at most 100
///
/// # Returns
/// - `200 OK` - Messages with their `direction` relative to the caller
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
#[utoipa::path(
    get,
    path = "/api/messages/conversations/{other_agent_id}",
    tag = MESSAGE_TAG,
    params(
        ("other_agent_id" = String, Path, description = "Internal agent ID of the counterpart"),
        LimitQuery
    ),
    responses(
        (status = 200, description = "Conversation", body = ConversationDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn conversation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(other_agent_id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let messages = MessageService::new(&state.db)
        .conversation(
            &caller.agent.id,
            &other_agent_id,
            query.limit.unwrap_or(CONVERSATION_LIMIT),
        )
        .await?;

    let viewer = caller.agent.id.as_str();
    let dto = ConversationDto {
        count: messages.len(),
        messages: messages
            .into_iter()
            .map(|message| message.into_dto(viewer))
            .collect(),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(dto).with_daily_login(caller.daily_login)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/messages/unread-count",
    tag = MESSAGE_TAG,
    responses(
        (status = 200, description = "Unread message count", body = UnreadCountDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unread_count(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    let unread_count = MessageService::new(&state.db)
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

/// Mark a received message as read.
///
/// # Returns
/// - `200 OK` - Message marked read
/// - `401 Unauthorized` - Missing `X-Agent-Id` header
/// - `404 Not Found` - Not an unread message addressed to the caller
#[utoipa::path(
    post,
    path = "/api/messages/{message_id}/read",
    tag = MESSAGE_TAG,
    params(
        ("message_id" = String, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message marked read", body = StatusMessageDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(message_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    MessageService::new(&state.db)
        .mark_read(&caller.agent.id, &message_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(StatusMessageDto::new("Message marked as read"))
                .with_daily_login(caller.daily_login),
        ),
    ))
}

/// Delete a message the caller sent.
#[utoipa::path(
    delete,
    path = "/api/messages/{message_id}",
    tag = MESSAGE_TAG,
    params(
        ("message_id" = String, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message deleted", body = StatusMessageDto),
        (status = 401, description = "Missing agent identity", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(message_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AgentGuard::new(&state.db, &headers).require().await?;

    MessageService::new(&state.db)
        .delete(&caller.agent.id, &message_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(StatusMessageDto::new("Message deleted"))
                .with_daily_login(caller.daily_login),
        ),
    ))
}
