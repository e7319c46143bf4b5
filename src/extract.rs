//! Extractors whose rejections are reported with the service's own error body.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor; malformed bodies become [`ApiError::Validation`].
///
/// A body sent without any `Content-Type` header is still parsed as JSON.
/// A body declared with a non-JSON content type is rejected.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            ApiError::json_body(format!(
                "Failed to deserialize the JSON body into the target type: {}",
                e
            ))
        })
    }
}

/// Path extractor; unparsable segments become [`ApiError::Validation`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ValidPath<T>(pub T);

/// Narrow a path id to the table's key type.
///
/// Ids beyond the `i32` range cannot name a stored operation, so they are
/// reported as not found rather than as malformed input.
pub fn operation_id(raw: i64) -> Result<i32, ApiError> {
    i32::try_from(raw).map_err(|_| ApiError::NotFound)
}
