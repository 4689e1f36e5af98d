//! Task repository trait
//!
//! Defines the interface for remote task operations. Implemented once by
//! the REST client and shared by every screen.

use async_trait::async_trait;

use super::model::{NewTask, Task};
use super::pairing::TaskPair;
use crate::account::UserId;
use crate::Result;

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Live tasks in a category (`All` returns the mirror rows)
    async fn list_tasks(&self, user: UserId, category: &str) -> Result<Vec<Task>>;

    /// Create a task; the server stores the category row and its mirror
    async fn create_task(&self, user: UserId, task: NewTask) -> Result<()>;

    /// Move both rows of a task to the trash
    async fn delete_task_pair(&self, user: UserId, pair: TaskPair) -> Result<()>;

    /// Soft-deleted tasks
    async fn list_trash(&self, user: UserId) -> Result<Vec<Task>>;

    /// Bring both rows of a task back from the trash
    async fn restore_task_pair(&self, user: UserId, pair: TaskPair) -> Result<()>;

    /// Permanently remove both rows of a trashed task
    async fn purge_task_pair(&self, user: UserId, pair: TaskPair) -> Result<()>;
}
