// src/lib.rs

use axum::{Router, routing::get};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use handlers::operation::{
    create_operation, delete_operation, get_operation, list_operations, update_operation,
};
use services::operation_store::OperationStore;

#[derive(Clone)]
pub struct AppState {
    pub store: OperationStore,
}

impl AppState {
    pub fn new(store: OperationStore) -> Self {
        Self { store }
    }
}

pub mod entities {
    pub mod prelude;
    pub mod operations;
}

pub mod services {
    pub mod operation_store;
}

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;

/// Build the HTTP router for the operations API.
///
/// Cross-origin requests are allowed from any origin with any method and header.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/operations", get(list_operations).post(create_operation))
        .route(
            "/operations/{id}",
            get(get_operation)
                .put(update_operation)
                .delete(delete_operation),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Resolves once Ctrl+C or SIGTERM is received.
///
/// If a handler cannot be installed that branch never resolves, so the
/// server keeps running instead of shutting down immediately.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
