//! Paired-row deletion
//!
//! A task and its `All` mirror are created back to back, so their ids are
//! adjacent. Deleting from a category view removes `id` and `id + 1`;
//! deleting from the `All` view removes `id - 1` and `id`.

use serde::{Deserialize, Serialize};

use super::model::Task;
use crate::category::ALL_CATEGORY;
use crate::{Error, Result};

/// Where the companion row sits relative to the selected one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairDirection {
    /// Companion is `id + 1` (selected in a specific category)
    Next,
    /// Companion is `id - 1` (selected in the `All` view)
    Prev,
}

impl PairDirection {
    /// Direction used when deleting from the view named `category`
    pub fn for_view(category: &str) -> Self {
        if category == ALL_CATEGORY {
            Self::Prev
        } else {
            Self::Next
        }
    }
}

/// The two row ids that make up one logical task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPair {
    pub task_id: i64,
    pub paired_id: i64,
}

impl TaskPair {
    pub fn contains(&self, id: i64) -> bool {
        id == self.task_id || id == self.paired_id
    }

    /// Drop both rows from a loaded list, keeping the order of the rest
    ///
    /// Rows that are already gone are simply not matched.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|t| !self.contains(t.id))
            .cloned()
            .collect()
    }
}

/// Computes and applies task pairs
pub struct PairedTaskDeleter;

impl PairedTaskDeleter {
    /// Id of the companion row
    pub fn paired_id(task_id: i64, direction: PairDirection) -> Result<i64> {
        if task_id <= 0 {
            return Err(Error::invalid(format!(
                "task id must be positive, got {}",
                task_id
            )));
        }
        match direction {
            PairDirection::Next => task_id
                .checked_add(1)
                .ok_or_else(|| Error::invalid(format!("task id {} has no successor", task_id))),
            PairDirection::Prev => Ok(task_id - 1),
        }
    }

    pub fn pair(task_id: i64, direction: PairDirection) -> Result<TaskPair> {
        Ok(TaskPair {
            task_id,
            paired_id: Self::paired_id(task_id, direction)?,
        })
    }

    /// Remove `task_id` and its companion from `tasks`
    pub fn delete(tasks: &[Task], task_id: i64, direction: PairDirection) -> Result<Vec<Task>> {
        Ok(Self::pair(task_id, direction)?.apply(tasks))
    }
}
