//! HTTP handlers for per-destination weather

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::AppState;
use shared::models::WeatherSnapshot;

/// Get today's classified weather for one destination
pub async fn get_destination_weather(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(destination_id): Path<u32>,
) -> AppResult<Json<WeatherSnapshot>> {
    let destination = state
        .catalog
        .find(destination_id)
        .ok_or_else(|| AppError::NotFound("Destination".to_string()))?;

    let snapshot = state
        .weather
        .snapshot_for(destination)
        .await
        .map_err(|error| {
            tracing::warn!(destination = %destination.name, %error, "weather fetch failed");
            AppError::WeatherServiceUnavailable
        })?;

    Ok(Json(snapshot))
}
