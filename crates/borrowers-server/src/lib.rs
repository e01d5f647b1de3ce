//! HTTP API for the borrowers dataset.
//!
//! Serves the borrowers file verbatim at `GET /api/borrowers`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use borrowers::providers::FileProvider;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Body returned when the dataset cannot be read
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn read_failed() -> Self {
        Self {
            error: "Failed to read data".to_string(),
        }
    }
}

async fn borrowers_handler(State(provider): State<Arc<FileProvider>>) -> Response {
    let result = tokio::task::spawn_blocking(move || provider.read_raw()).await;
    match result {
        Ok(Ok(raw)) => ([(header::CONTENT_TYPE, "application/json")], raw).into_response(),
        Ok(Err(e)) => {
            error!("Failed to read borrowers file: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::read_failed())).into_response()
        }
        Err(e) => {
            error!("Borrowers read task failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::read_failed())).into_response()
        }
    }
}

/// Build the HTTP API router over the given data file.
pub fn build_router(provider: Arc<FileProvider>) -> Router {
    Router::new()
        .route("/api/borrowers", get(borrowers_handler))
        .with_state(provider)
}
