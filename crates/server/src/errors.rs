use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::BlogError;
use thiserror::Error;
use tracing::error;

use crate::responses;

/// Failure at the handler boundary. Every variant renders as a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Conflict(String),
    #[error("Invalid credentials")]
    Unauthorized,
    /// Body parse failures, store failures and panics. Rendered as 500.
    #[error("{0}")]
    Internal(String),
}

impl From<BlogError> for ApiError {
    fn from(e: BlogError) -> Self {
        let msg = e.to_string();
        match e {
            BlogError::UsernameTaken(_) => ApiError::Conflict(msg),
            BlogError::InvalidCredentials => ApiError::Unauthorized,
            BlogError::Service(_) => ApiError::Internal(msg),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self { ApiError::Internal(e.to_string()) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Conflict(msg) => responses::text(StatusCode::CONFLICT, msg),
            ApiError::Unauthorized => responses::text(StatusCode::UNAUTHORIZED, "Invalid credentials"),
            ApiError::Internal(msg) => {
                let msg = if msg.is_empty() { "Unknown Error".to_string() } else { msg };
                error!(error = %msg, "request failed");
                responses::text(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }
}

/// Turn a panic payload from a handler into the same 500 an error would produce.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let msg = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        String::new()
    };
    ApiError::Internal(msg).into_response()
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("store unavailable: {0}")]
    Store(#[from] service::ServiceError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
