//! Shared screen flows
//!
//! Category screens and the trash screen all load a task list, ask the
//! repository to act on a row pair, then drop the pair locally.

use super::model::Task;
use super::pairing::{PairDirection, PairedTaskDeleter, TaskPair};
use super::repository::TaskRepository;
use crate::account::UserId;
use crate::{Error, Result};

/// Fail with NotFound unless `task_id` is one of the rows on screen
///
/// Ids outside the view would pair rows of two different tasks.
fn require_listed(tasks: &[Task], task_id: i64, view: &str) -> Result<()> {
    if tasks.iter().any(|t| t.id == task_id) {
        Ok(())
    } else {
        Err(Error::NotFound(format!("task {} is not in {}", task_id, view)))
    }
}

/// Tasks shown on one category screen
#[derive(Debug, Clone)]
pub struct CategoryTasks {
    category: String,
    tasks: Vec<Task>,
}

impl CategoryTasks {
    /// Fetch the live tasks of `category`
    pub async fn load<R>(repo: &R, user: UserId, category: impl Into<String>) -> Result<Self>
    where
        R: TaskRepository + ?Sized,
    {
        let category = category.into();
        let tasks = repo.list_tasks(user, &category).await?;
        Ok(Self { category, tasks })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Direction implied by this screen
    pub fn direction(&self) -> PairDirection {
        PairDirection::for_view(&self.category)
    }

    /// Delete a task and its companion remotely, then locally
    ///
    /// `task_id` must be listed on this screen. The local list is only
    /// touched once the remote call succeeds.
    pub async fn delete<R>(&mut self, repo: &R, user: UserId, task_id: i64) -> Result<TaskPair>
    where
        R: TaskRepository + ?Sized,
    {
        let pair = PairedTaskDeleter::pair(task_id, self.direction())?;
        require_listed(&self.tasks, task_id, &self.category)?;
        repo.delete_task_pair(user, pair).await?;
        self.tasks = pair.apply(&self.tasks);
        Ok(pair)
    }
}

/// The trash screen
///
/// Only category rows are listed; restoring or purging one acts on it and
/// the mirror created right after it.
#[derive(Debug, Clone, Default)]
pub struct TrashView {
    tasks: Vec<Task>,
}

impl TrashView {
    pub async fn load<R>(repo: &R, user: UserId) -> Result<Self>
    where
        R: TaskRepository + ?Sized,
    {
        let tasks = repo
            .list_trash(user)
            .await?
            .into_iter()
            .filter(|t| !t.is_mirror())
            .collect();
        Ok(Self { tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub async fn restore<R>(&mut self, repo: &R, user: UserId, task_id: i64) -> Result<TaskPair>
    where
        R: TaskRepository + ?Sized,
    {
        let pair = PairedTaskDeleter::pair(task_id, PairDirection::Next)?;
        require_listed(&self.tasks, task_id, "the trash")?;
        repo.restore_task_pair(user, pair).await?;
        self.tasks = pair.apply(&self.tasks);
        Ok(pair)
    }

    pub async fn purge<R>(&mut self, repo: &R, user: UserId, task_id: i64) -> Result<TaskPair>
    where
        R: TaskRepository + ?Sized,
    {
        let pair = PairedTaskDeleter::pair(task_id, PairDirection::Next)?;
        require_listed(&self.tasks, task_id, "the trash")?;
        repo.purge_task_pair(user, pair).await?;
        self.tasks = pair.apply(&self.tasks);
        Ok(pair)
    }
}
