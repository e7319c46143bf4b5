#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use financy_backend::{AppState, build_router, services::operation_store::OperationStore};
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
use serde_json::Value;
use tower::ServiceExt;

/// Set up a fresh in-memory SQLite database with the operations table.
///
/// The pool is pinned to one connection so every query sees the same
/// in-memory database for the lifetime of the test.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    financy_backend::db::connect(options).await
}

pub async fn setup_test_store() -> OperationStore {
    let db = setup_test_db().await.expect("Failed to set up test database");
    OperationStore::new(db)
}

pub async fn build_test_router() -> Router {
    build_router(AppState::new(setup_test_store().await))
}

/// Send one request through the router and decode the JSON response body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        assert!(db.is_ok(), "Test database connection should succeed");
    }
}
