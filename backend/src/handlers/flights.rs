//! HTTP handlers for flight search

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::external::flights::FlightOption;
use crate::middleware::CurrentUser;
use crate::AppState;

/// Query parameters for flight search
#[derive(Debug, Deserialize)]
pub struct FlightSearchQuery {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub passengers: Option<u32>,
}

/// Search flights between two known cities
pub async fn search_flights(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Query(query): Query<FlightSearchQuery>,
) -> AppResult<Json<Vec<FlightOption>>> {
    if query.origin.is_empty() || query.destination.is_empty() || query.date.is_empty() {
        return Err(AppError::Validation {
            field: "query".to_string(),
            message: "Origin, destination, and date are required".to_string(),
        });
    }

    let flights = state
        .flights
        .search_flights(
            &query.origin,
            &query.destination,
            &query.date,
            query.passengers.unwrap_or(1),
        )
        .await?;

    Ok(Json(flights))
}
