//! HTTP handlers

pub mod health;
pub mod threat_map;

use crate::error::AppError;

/// Unknown `/api/*` routes get a JSON 404 instead of the static fallback
pub async fn api_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
