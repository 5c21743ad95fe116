//! HTTP handlers for travel preference endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::preferences::PreferencesInput;
use crate::AppState;
use shared::models::UserPreferences;

/// Submit travel preferences, replacing any prior submission
pub async fn submit_preferences(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<PreferencesInput>,
) -> AppResult<Json<UserPreferences>> {
    let preferences = state
        .preferences
        .submit(current_user.0.user_id, input)
        .await?;
    Ok(Json(preferences))
}

/// Get the caller's current preferences (JSON null when none are set)
pub async fn get_preferences(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Option<UserPreferences>>> {
    let preferences = state.preferences.get(current_user.0.user_id).await?;
    Ok(Json(preferences))
}
