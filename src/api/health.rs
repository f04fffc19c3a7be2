//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Books currently held by the in-memory store
    pub books: usize,
}

/// Health check endpoint; fails with 500 when the book store is unusable
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Book store unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn health_check(State(state): State<crate::AppState>) -> AppResult<Json<HealthResponse>> {
    let books = state.services.books.count().await?;
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        books,
    }))
}
