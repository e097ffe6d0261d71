use std::borrow::Cow;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domains::errors::ServiceError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application error rendered as a JSON object: the optional payload
/// entries plus a `message` field, sent with the carried status.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    message: Cow<'static, str>,
    status: StatusCode,
    payload: Option<Map<String, Value>>,
}

impl ApiError {
    /// Defaults to 400 Bad Request.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
            payload: None,
        }
    }

    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(message).with_status(StatusCode::NOT_FOUND)
    }

    pub fn internal() -> Self {
        Self::new(INTERNAL_ERROR_MESSAGE).with_status(StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// `message` always wins over a payload entry with the same key.
    pub fn to_body(&self) -> Value {
        let mut body = self.payload.clone().unwrap_or_default();
        body.insert(
            "message".to_string(),
            Value::String(self.message.to_string()),
        );
        Value::Object(body)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::warn!(event = "api_error", status = self.status.as_u16(), message = %self.message);
        } else {
            tracing::debug!(event = "api_error", status = self.status.as_u16(), message = %self.message);
        }
        (self.status, Json(self.to_body())).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::NotFound(message) => Self::not_found(message),
            ServiceError::DbError => Self::internal(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub(crate) struct ErrorResponse {
    pub(crate) error: &'static str,
}

/// Router fallback for paths that match no route.
pub(crate) async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
