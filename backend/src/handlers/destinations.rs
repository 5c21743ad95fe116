//! HTTP handlers for the destination catalog

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::AppState;
use shared::models::Destination;

/// List the full destination catalog
pub async fn list_destinations(State(state): State<AppState>) -> Json<Vec<Destination>> {
    Json(state.catalog.destinations().to_vec())
}

/// Get one destination by id
pub async fn get_destination(
    State(state): State<AppState>,
    Path(destination_id): Path<u32>,
) -> AppResult<Json<Destination>> {
    state
        .catalog
        .find(destination_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Destination".to_string()))
}
