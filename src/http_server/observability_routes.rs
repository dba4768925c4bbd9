//! Observability HTTP Routes
//!
//! Welcome page, health check and request counters.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tracing::info;

use super::book_routes::BookState;
use crate::observability::MetricsSnapshot;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

const HOME_PAGE: &str = "Welcome to the Book API HomePage!\n\
GET /books    Lists all books\n\
POST /book    Creates a new book\n\
GET /book/{id}    Retrieves book information\n\
PUT /book/{id}    Updates book information\n\
DELETE /book/{id}    Deletes a book\n";

/// Create observability routes
pub fn observability_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

async fn home_handler() -> &'static str {
    info!("Endpoint HomePage");
    HOME_PAGE
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler(State(state): State<Arc<BookState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
