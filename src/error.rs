//! Request-level error type and its translation into HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;

use crate::models::common::ErrorResponse;

/// Detail sent to the client whenever an id has no matching operation.
pub const NOT_FOUND_DETAIL: &str = "Operation not found";

/// The errors a request handler may end with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The client sent a body or path that could not be turned into a valid
    /// operation. The message is shown to the client as-is.
    #[error("{0}")]
    Validation(String),

    /// No operation exists with the requested id.
    ///
    /// This is an ordinary outcome for clients holding stale ids and is not
    /// logged as an error.
    #[error("Operation not found")]
    NotFound,

    /// The database could not be reached or rejected a statement.
    ///
    /// The underlying message is only logged on the server.
    #[error("database error: {0}")]
    Storage(#[from] DbErr),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Validation error for a body that failed JSON decoding.
    ///
    /// Exact amounts travel through serde_json's arbitrary-precision number
    /// wrapper, whose internal field name would otherwise show up in the
    /// error path (`amount.$serde_json::private::Number: ...`).
    pub fn json_body(message: String) -> Self {
        ApiError::Validation(message.replace(ARBITRARY_PRECISION_TOKEN, ""))
    }
}

const ARBITRARY_PRECISION_TOKEN: &str = ".$serde_json::private::Number";

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::json_body(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match self {
            ApiError::Validation(message) => {
                tracing::warn!("Rejected request: {}", message);
                message
            }
            ApiError::NotFound => {
                tracing::debug!("{}", NOT_FOUND_DETAIL);
                NOT_FOUND_DETAIL.to_string()
            }
            ApiError::Storage(error) => {
                tracing::error!("Database error: {}", error);
                "Internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
