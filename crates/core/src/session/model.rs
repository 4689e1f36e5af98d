//! Session model and store trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::UserId;
use crate::category::SortMode;
use crate::Result;

/// The signed-in user as remembered on this device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
    #[serde(default)]
    pub sort_mode: SortMode,
}

impl Session {
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
            signed_in_at: Utc::now(),
            sort_mode: SortMode::default(),
        }
    }

    /// Set the sort mode
    pub fn with_sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }
}

/// Key-value style persistence for the current session
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The stored session, if any
    async fn load(&self) -> Result<Option<Session>>;

    /// Replace the stored session
    async fn save(&self, session: Session) -> Result<()>;

    /// Forget the stored session; returns whether one existed
    async fn clear(&self) -> Result<bool>;
}
