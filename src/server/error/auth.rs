use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The `X-Agent-Id` header is absent or blank.
    #[error("Missing X-Agent-Id header")]
    MissingAgentIdentity,

    /// An admin endpoint was called without a bearer token.
    #[error("Missing admin key")]
    MissingAdminKey,

    /// The bearer token does not match any stored admin key hash.
    #[error("Invalid admin key")]
    InvalidAdminKey,
}

/// All authentication errors map to 401 Unauthorized with the error's message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
