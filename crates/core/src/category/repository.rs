//! Category repository trait

use async_trait::async_trait;

use super::model::{Category, NewCategory};
use crate::account::UserId;
use crate::Result;

/// Remote category operations
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Custom categories created by the user
    async fn list_categories(&self, user: UserId) -> Result<Vec<Category>>;

    /// Create a custom category
    async fn create_category(&self, user: UserId, category: NewCategory) -> Result<Category>;
}
