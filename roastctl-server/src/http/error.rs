//! API error type with IntoResponse
//!
//! Every failure has the same shape: a status code and an empty body. The
//! cause is logged server-side and never sent to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body is not valid JSON for the expected shape (400)
    MalformedBody { reason: String },

    /// Path id is not an integer (400)
    InvalidId { value: String },

    /// Path segment could not be decoded (400)
    InvalidPath { reason: String },

    /// Update matched no row (404)
    NotFound { resource: &'static str, id: i64 },

    /// Store failure (500, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody { .. } | Self::InvalidId { .. } | Self::InvalidPath { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::MalformedBody { reason } => {
                tracing::warn!(%reason, "rejected request body");
            }
            Self::InvalidId { value } => {
                tracing::warn!(%value, "rejected path id");
            }
            Self::InvalidPath { reason } => {
                tracing::warn!(%reason, "rejected request path");
            }
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id, "no row matched");
            }
            Self::Store(e) => {
                tracing::error!("Store error: {}", e);
            }
        }

        self.status().into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
