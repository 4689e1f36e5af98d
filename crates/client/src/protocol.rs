//! Wire types for the Taskbox API
//!
//! Requests are JSON objects with an `action` discriminator, the caller's
//! `user_id` once signed in, and the action's own fields at the top level.
//! Responses share one envelope keyed on a boolean `status`.

use serde::{Deserialize, Serialize};
use taskbox_core::account::UserId;
use taskbox_core::{Error, Result};

/// API resource, one endpoint each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Auth,
    Categories,
    Tasks,
    Trash,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Categories => "categories",
            Self::Tasks => "tasks",
            Self::Trash => "trash",
        }
    }
}

/// Operation requested from a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Register,
    Login,
    ListCategories,
    CreateCategory,
    ListTasks,
    AddTask,
    DeleteTask,
    ListTrash,
    RestoreTask,
    PurgeTask,
}

impl Action {
    pub fn resource(&self) -> Resource {
        match self {
            Self::Register | Self::Login => Resource::Auth,
            Self::ListCategories | Self::CreateCategory => Resource::Categories,
            Self::ListTasks | Self::AddTask | Self::DeleteTask => Resource::Tasks,
            Self::ListTrash | Self::RestoreTask | Self::PurgeTask => Resource::Trash,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiRequest<'a, P: Serialize> {
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(flatten)]
    pub payload: &'a P,
}

/// Payload for actions that only need the discriminator and user id
#[derive(Debug, Serialize)]
pub(crate) struct NoFields {}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryFilter<'a> {
    pub category: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddTaskFields<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignedIn {
    pub user_id: UserId,
}

/// Response envelope
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Turn `status: false` into an API error
    pub fn into_result(self, action: Action) -> Result<Option<T>> {
        if self.status {
            Ok(self.data)
        } else {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("{:?} was rejected", action));
            Err(Error::Api(message))
        }
    }
}
