//! Injectable storage for users and preferences
//!
//! The scoring core stays a pure function of the data it is handed; these
//! traits are the seam where any persistence mechanism can be plugged in.
//! The default implementation is in-memory, matching the platform's
//! no-persistence-beyond-process-lifetime contract for preference data.

mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::AppResult;
use shared::models::UserPreferences;

pub use memory::{InMemoryPreferenceStore, InMemoryUserStore};

/// A stored user account, credentials included
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User account storage
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user; fails with a duplicate-entry error if the email is
    /// already registered
    async fn create(&self, email: &str, password_hash: &str) -> AppResult<UserRecord>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;
}

/// Preference storage: at most one active record per user
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Store a preference record, replacing any prior record for the user
    async fn upsert(&self, preferences: UserPreferences) -> AppResult<UserPreferences>;

    async fn get(&self, user_id: Uuid) -> AppResult<Option<UserPreferences>>;
}
