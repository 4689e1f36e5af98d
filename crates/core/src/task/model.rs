//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::require;
use crate::category::ALL_CATEGORY;
use crate::{Error, Result};

/// A task row as returned by the remote API
///
/// Every logical task is stored as two rows with adjacent ids: one in its
/// own category and a mirror in the `All` aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category_name: String,
    /// Set while the task sits in the trash
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        category_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category_name: category_name.into(),
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether this row is the `All` aggregate mirror
    pub fn is_mirror(&self) -> bool {
        self.category_name == ALL_CATEGORY
    }
}

/// Request to create a task; the server stores it as a row pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub category_name: String,
}

impl NewTask {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category_name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category_name: category_name.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("category", &self.category_name)?;
        if self.category_name == ALL_CATEGORY {
            return Err(Error::invalid(
                "tasks are added to a specific category, not All",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task() {
        let task = Task::new(3, "Pack", "passport and bags", "Travel");
        assert_eq!(task.id, 3);
        assert!(!task.is_deleted());
        assert!(!task.is_mirror());
        assert!(Task::new(4, "Pack", "passport and bags", ALL_CATEGORY).is_mirror());
    }

    #[test]
    fn test_task_json_uses_snake_case() {
        let task: Task = serde_json::from_str(
            r#"{"id": 8, "title": "Read", "description": "ch. 3", "category_name": "Study",
                "deleted_at": "2026-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(task.category_name, "Study");
        assert!(task.is_deleted());
    }

    #[test]
    fn test_new_task_validation() {
        assert!(NewTask::new("Read", "ch. 3", "Study").validate().is_ok());
        assert!(NewTask::new("", "ch. 3", "Study").validate().is_err());
        assert!(NewTask::new("Read", " ", "Study").validate().is_err());
        match NewTask::new("Read", "ch. 3", ALL_CATEGORY).validate().unwrap_err() {
            Error::InvalidInput(msg) => assert!(msg.contains("All")),
            e => panic!("Expected InvalidInput error, got: {:?}", e),
        }
    }
}
