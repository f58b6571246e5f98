//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON request body.
///
/// Unlike `axum::Json` this does not insist on a `Content-Type` header, and
/// every rejection is an [`ApiError::MalformedBody`], so all handlers fail
/// the same way on bad input.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedBody {
                reason: rejection.body_text(),
            })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| ApiError::MalformedBody {
            reason: e.to_string(),
        })?;

        Ok(Self(value))
    }
}

/// Extract an integer record id from the path
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let PathSegment(raw) = PathSegment::from_request_parts(parts, state).await?;

        let id = raw
            .parse::<i64>()
            .map_err(|_| ApiError::InvalidId { value: raw.clone() })?;

        Ok(Self(id))
    }
}

/// Extract a single percent-decoded path segment
pub struct PathSegment(pub String);

impl<S> FromRequestParts<S> for PathSegment
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::InvalidPath {
                reason: rejection.body_text(),
            })?;

        Ok(Self(segment))
    }
}
