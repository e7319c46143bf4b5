//! Handlers for the /operations resource
//!
//! Handlers only branch on absence. Storage failures propagate through `?`
//! into [`ApiError`], which renders the response.

use axum::{Json, extract::State};
use tracing::info;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{ValidJson, ValidPath, operation_id};
use crate::models::common::MessageResponse;
use crate::models::operation::{OperationPayload, OperationResponse};

/// GET /operations
pub async fn list_operations(
    State(state): State<AppState>,
) -> Result<Json<Vec<OperationResponse>>, ApiError> {
    let operations = state.store.list().await?;
    info!("GET /operations count={}", operations.len());

    Ok(Json(operations.into_iter().map(OperationResponse::from).collect()))
}

/// POST /operations
pub async fn create_operation(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<OperationPayload>,
) -> Result<Json<OperationResponse>, ApiError> {
    info!("POST /operations payload={}", payload.to_log_string());
    let new_operation = payload.validate()?;

    let created = state.store.insert(new_operation).await?;
    info!("Created operation id={}", created.id);

    Ok(Json(created.into()))
}

/// GET /operations/{id}
pub async fn get_operation(
    State(state): State<AppState>,
    ValidPath(raw_id): ValidPath<i64>,
) -> Result<Json<OperationResponse>, ApiError> {
    info!("GET /operations/{}", raw_id);
    let id = operation_id(raw_id)?;

    let operation = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(operation.into()))
}

/// PUT /operations/{id}
///
/// Full replace: every field in the body overwrites the stored value.
pub async fn update_operation(
    State(state): State<AppState>,
    ValidPath(raw_id): ValidPath<i64>,
    ValidJson(payload): ValidJson<OperationPayload>,
) -> Result<Json<OperationResponse>, ApiError> {
    info!("PUT /operations/{} payload={}", raw_id, payload.to_log_string());
    let fields = payload.validate()?;
    let id = operation_id(raw_id)?;

    let updated = state
        .store
        .update(id, fields)
        .await?
        .ok_or(ApiError::NotFound)?;
    info!("Updated operation id={}", id);

    Ok(Json(updated.into()))
}

/// DELETE /operations/{id}
pub async fn delete_operation(
    State(state): State<AppState>,
    ValidPath(raw_id): ValidPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("DELETE /operations/{}", raw_id);
    let id = operation_id(raw_id)?;

    if !state.store.delete(id).await? {
        return Err(ApiError::NotFound);
    }
    info!("Deleted operation id={}", id);

    Ok(Json(MessageResponse {
        message: "Operation deleted".to_string(),
    }))
}
