//! Taskbox REST client

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use taskbox_core::account::{AccountRepository, Credentials, Registration, UserId};
use taskbox_core::category::{Category, CategoryRepository, NewCategory};
use taskbox_core::task::{NewTask, Task, TaskPair, TaskRepository};
use taskbox_core::{Error, Result};

use crate::config::ApiConfig;
use crate::protocol::{
    Action, AddTaskFields, ApiRequest, ApiResponse, CategoryFilter, NoFields, SignedIn,
};

/// Client for the remote Taskbox API
///
/// One instance serves every screen; it implements all of the data-access
/// traits from `taskbox-core`.
pub struct RestClient {
    client: Client,
    config: ApiConfig,
}

impl RestClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send one action and unwrap the response envelope
    async fn call<P, T>(
        &self,
        action: Action,
        user: Option<UserId>,
        payload: &P,
    ) -> Result<Option<T>>
    where
        P: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let url = self.config.url(action.resource().path());
        let request = ApiRequest {
            action,
            user_id: user,
            payload,
        };

        debug!("POST {} action={:?}", url, action);

        let res = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to reach {}: {}", url, e)))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!("{} returned {} for {:?}", url, status, action);
            return Err(Error::Network(format!("{} returned {}: {}", url, status, body)));
        }

        let envelope = res
            .json::<ApiResponse<T>>()
            .await
            .map_err(|e| Error::Api(format!("Malformed response to {:?}: {}", action, e)))?;

        envelope.into_result(action)
    }

    /// Like [`Self::call`] but the response must carry `data`
    async fn fetch<P, T>(&self, action: Action, user: Option<UserId>, payload: &P) -> Result<T>
    where
        P: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        self.call(action, user, payload)
            .await?
            .ok_or_else(|| Error::Api(format!("Response to {:?} has no data", action)))
    }

    /// Send an action whose response data, if any, is ignored
    async fn send<P>(&self, action: Action, user: UserId, payload: &P) -> Result<()>
    where
        P: Serialize + Sync,
    {
        self.call::<P, serde_json::Value>(action, Some(user), payload).await?;
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for RestClient {
    async fn register(&self, registration: Registration) -> Result<UserId> {
        registration.validate()?;
        let signed_in: SignedIn = self.fetch(Action::Register, None, &registration).await?;
        info!("Registered user {}", signed_in.user_id);
        Ok(signed_in.user_id)
    }

    async fn login(&self, credentials: Credentials) -> Result<UserId> {
        credentials.validate()?;
        let signed_in: SignedIn = self.fetch(Action::Login, None, &credentials).await?;
        info!("Signed in as user {}", signed_in.user_id);
        Ok(signed_in.user_id)
    }
}

#[async_trait]
impl CategoryRepository for RestClient {
    async fn list_categories(&self, user: UserId) -> Result<Vec<Category>> {
        self.fetch(Action::ListCategories, Some(user), &NoFields {}).await
    }

    async fn create_category(&self, user: UserId, category: NewCategory) -> Result<Category> {
        category.validate()?;
        self.fetch(Action::CreateCategory, Some(user), &category).await
    }
}

#[async_trait]
impl TaskRepository for RestClient {
    async fn list_tasks(&self, user: UserId, category: &str) -> Result<Vec<Task>> {
        let tasks: Vec<Task> = self
            .fetch(Action::ListTasks, Some(user), &CategoryFilter { category })
            .await?;
        Ok(tasks.into_iter().filter(|t| !t.is_deleted()).collect())
    }

    async fn create_task(&self, user: UserId, task: NewTask) -> Result<()> {
        task.validate()?;
        let fields = AddTaskFields {
            title: &task.title,
            description: &task.description,
            category: &task.category_name,
        };
        self.send(Action::AddTask, user, &fields).await
    }

    async fn delete_task_pair(&self, user: UserId, pair: TaskPair) -> Result<()> {
        self.send(Action::DeleteTask, user, &pair).await?;
        info!("Moved tasks {} and {} to trash", pair.task_id, pair.paired_id);
        Ok(())
    }

    async fn list_trash(&self, user: UserId) -> Result<Vec<Task>> {
        self.fetch(Action::ListTrash, Some(user), &NoFields {}).await
    }

    async fn restore_task_pair(&self, user: UserId, pair: TaskPair) -> Result<()> {
        self.send(Action::RestoreTask, user, &pair).await?;
        info!("Restored tasks {} and {}", pair.task_id, pair.paired_id);
        Ok(())
    }

    async fn purge_task_pair(&self, user: UserId, pair: TaskPair) -> Result<()> {
        self.send(Action::PurgeTask, user, &pair).await?;
        info!("Purged tasks {} and {}", pair.task_id, pair.paired_id);
        Ok(())
    }
}
