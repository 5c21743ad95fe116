//! In-memory store implementations

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::{PreferenceStore, UserRecord, UserStore};
use shared::models::UserPreferences;

/// User accounts held in process memory
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, email: &str, password_hash: &str) -> AppResult<UserRecord> {
        let mut users = self.users.write().await;

        if users.values().any(|user| user.email == email) {
            return Err(AppError::DuplicateEntry("email".to_string()));
        }

        let record = UserRecord {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }
}

/// Preference records held in process memory, one per user
#[derive(Default)]
pub struct InMemoryPreferenceStore {
    preferences: RwLock<HashMap<Uuid, UserPreferences>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn upsert(&self, preferences: UserPreferences) -> AppResult<UserPreferences> {
        let mut records = self.preferences.write().await;
        records.insert(preferences.user_id, preferences.clone());
        Ok(preferences)
    }

    async fn get(&self, user_id: Uuid) -> AppResult<Option<UserPreferences>> {
        let records = self.preferences.read().await;
        Ok(records.get(&user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::types::BudgetTier;

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = InMemoryUserStore::new();
        store.create("a@example.com", "hash").await.unwrap();

        let err = store.create("a@example.com", "hash2").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateEntry(_)));
    }

    #[tokio::test]
    async fn find_by_email_returns_created_user() {
        let store = InMemoryUserStore::new();
        let created = store.create("b@example.com", "hash").await.unwrap();

        let found = store.find_by_email("b@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(store.find_by_email("missing@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upsert_replaces_prior_record() {
        let store = InMemoryPreferenceStore::new();
        let user_id = Uuid::new_v4();

        let first = UserPreferences::new(
            user_id,
            BudgetTier::Moderate,
            "hot",
            vec!["Asian".to_string()],
        );
        store.upsert(first).await.unwrap();

        let second = UserPreferences::new(
            user_id,
            BudgetTier::Luxury,
            "cold",
            vec!["French".to_string()],
        );
        store.upsert(second.clone()).await.unwrap();

        let stored = store.get(user_id).await.unwrap().unwrap();
        assert_eq!(stored, second);
    }

    #[tokio::test]
    async fn get_missing_preferences_is_none() {
        let store = InMemoryPreferenceStore::new();
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }
}
