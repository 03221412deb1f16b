//! Request handlers

mod catalog;
mod inventory;

pub use catalog::*;
pub use inventory::*;

use axum::http::StatusCode;
use axum::Json;
use libris_core::{InventoryError, LibrisError, RemoteError, StoreError};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Error payload surfaced to the operator
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Rejection type shared by all handlers
pub type ApiError = (StatusCode, Json<ErrorBody>);

/// Map a core error onto the HTTP status space
pub(crate) fn error_response(err: LibrisError) -> ApiError {
    let status = match &err {
        LibrisError::Inventory(InventoryError::Validation(_)) => StatusCode::BAD_REQUEST,
        LibrisError::Inventory(InventoryError::NotFound(_)) => StatusCode::NOT_FOUND,
        LibrisError::Inventory(
            InventoryError::DuplicateKey(_)
            | InventoryError::AlreadyIssued(_)
            | InventoryError::NotIssued(_),
        ) => StatusCode::CONFLICT,
        // A bad upload filename is the operator's to fix
        LibrisError::Store(StoreError::InvalidFileName(_)) => StatusCode::BAD_REQUEST,
        LibrisError::Remote(RemoteError::InvalidQuery(_)) => StatusCode::BAD_REQUEST,
        LibrisError::Remote(_) => StatusCode::BAD_GATEWAY,
        LibrisError::Store(_) | LibrisError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!("Interaction failed: {}", err);
    }

    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}
