//! API error types and conversions

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use touch_core::{ErrorEnvelope, StoreError};

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request (missing field, malformed body)
    BadRequest(String),
    /// 500 - reading the parameter store failed
    StoreRead(StoreError),
    /// 500 - writing (or reading back) the parameter store failed
    StoreWrite(StoreError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreRead(_) | ApiError::StoreWrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error kind, used as the message prefix and in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad request",
            ApiError::StoreRead(_) => "store read failure",
            ApiError::StoreWrite(_) => "store write failure",
        }
    }

    /// Parameter key behind a store failure
    pub fn key(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest(_) => None,
            ApiError::StoreRead(err) | ApiError::StoreWrite(err) => err.key(),
        }
    }

    /// Message placed in the envelope's `error` field
    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::StoreRead(err) | ApiError::StoreWrite(err) => {
                format!("{}: {}", self.kind(), err)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(
                error = self.kind(),
                key = self.key().unwrap_or("-"),
                %message,
                "API error"
            );
        } else {
            tracing::debug!(error = self.kind(), %message, "API client error");
        }

        (status, Json(ErrorEnvelope::new(message))).into_response()
    }
}
