//! Preference management service
//!
//! Validates submissions at the write boundary so the scoring engine can
//! assume any stored record is complete.

use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::PreferenceStore;
use shared::models::UserPreferences;
use shared::validation::{parse_budget_tier, validate_food_preferences, validate_weather_preference};

/// Preference service
#[derive(Clone)]
pub struct PreferenceService {
    store: Arc<dyn PreferenceStore>,
}

/// Input for submitting travel preferences
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesInput {
    pub budget: String,
    pub weather: String,
    pub food_preferences: Vec<String>,
}

impl PreferenceService {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Validate and store a submission, replacing any prior record
    pub async fn submit(&self, user_id: Uuid, input: PreferencesInput) -> AppResult<UserPreferences> {
        let budget = parse_budget_tier(&input.budget).map_err(|message| AppError::Validation {
            field: "budget".to_string(),
            message: message.to_string(),
        })?;

        if let Err(message) = validate_weather_preference(&input.weather) {
            return Err(AppError::Validation {
                field: "weather".to_string(),
                message: message.to_string(),
            });
        }

        if let Err(message) = validate_food_preferences(&input.food_preferences) {
            return Err(AppError::Validation {
                field: "foodPreferences".to_string(),
                message: message.to_string(),
            });
        }

        let preferences =
            UserPreferences::new(user_id, budget, input.weather, input.food_preferences);
        self.store.upsert(preferences).await
    }

    /// The user's current preferences, if any have been submitted
    pub async fn get(&self, user_id: Uuid) -> AppResult<Option<UserPreferences>> {
        self.store.get(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryPreferenceStore;
    use shared::types::BudgetTier;

    fn service() -> PreferenceService {
        PreferenceService::new(Arc::new(InMemoryPreferenceStore::new()))
    }

    #[tokio::test]
    async fn valid_submission_is_stored() {
        let service = service();
        let user_id = Uuid::new_v4();

        let stored = service
            .submit(
                user_id,
                PreferencesInput {
                    budget: "luxury".to_string(),
                    weather: "moderate".to_string(),
                    food_preferences: vec!["Italian".to_string()],
                },
            )
            .await
            .unwrap();

        assert_eq!(stored.budget, BudgetTier::Luxury);
        assert_eq!(service.get(user_id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn resubmission_replaces_prior_record() {
        let service = service();
        let user_id = Uuid::new_v4();

        for weather in ["hot", "cold"] {
            service
                .submit(
                    user_id,
                    PreferencesInput {
                        budget: "moderate".to_string(),
                        weather: weather.to_string(),
                        food_preferences: vec!["Local".to_string()],
                    },
                )
                .await
                .unwrap();
        }

        let stored = service.get(user_id).await.unwrap().unwrap();
        assert_eq!(stored.weather, "cold");
    }

    #[tokio::test]
    async fn incomplete_submissions_are_rejected() {
        let service = service();
        let user_id = Uuid::new_v4();

        let bad_budget = service
            .submit(
                user_id,
                PreferencesInput {
                    budget: "cheap".to_string(),
                    weather: "hot".to_string(),
                    food_preferences: vec!["Thai".to_string()],
                },
            )
            .await;
        assert!(matches!(bad_budget, Err(AppError::Validation { .. })));

        let bad_weather = service
            .submit(
                user_id,
                PreferencesInput {
                    budget: "moderate".to_string(),
                    weather: "balmy".to_string(),
                    food_preferences: vec!["Thai".to_string()],
                },
            )
            .await;
        assert!(matches!(bad_weather, Err(AppError::Validation { .. })));

        let empty_food = service
            .submit(
                user_id,
                PreferencesInput {
                    budget: "moderate".to_string(),
                    weather: "hot".to_string(),
                    food_preferences: vec![],
                },
            )
            .await;
        assert!(matches!(empty_food, Err(AppError::Validation { .. })));

        // Nothing invalid was stored
        assert!(service.get(user_id).await.unwrap().is_none());
    }
}
