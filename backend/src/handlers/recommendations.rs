//! HTTP handler for the recommendation endpoint

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::AppState;
use shared::models::ScoredDestination;

/// Get ranked destination recommendations for the authenticated user
///
/// An empty list means no preferences are set; per-destination weather
/// failures never fail the request.
pub async fn get_recommendations(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<ScoredDestination>>> {
    let recommendations = state
        .recommendations
        .get_recommendations(current_user.0.user_id)
        .await?;
    Ok(Json(recommendations))
}
