//! User travel preference models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::BudgetTier;

/// A user's declared travel preferences
///
/// At most one active record exists per user; a new submission replaces the
/// prior one. The weather preference is kept as the submitted string: the
/// compatibility relation treats unrecognized values as a non-match rather
/// than an error, and the write boundary validates against the recognized
/// category names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub user_id: Uuid,
    pub budget: BudgetTier,
    pub weather: String,
    pub food_preferences: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

impl UserPreferences {
    pub fn new(
        user_id: Uuid,
        budget: BudgetTier,
        weather: impl Into<String>,
        food_preferences: Vec<String>,
    ) -> Self {
        Self {
            user_id,
            budget,
            weather: weather.into(),
            food_preferences,
            submitted_at: Utc::now(),
        }
    }
}
