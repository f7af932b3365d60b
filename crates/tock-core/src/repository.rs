use crate::deadline;
use crate::error::CoreError;
use crate::models::{generate_key, NewTaskData, Task, UpdateTaskData};
use crate::storage::KeyValueStorage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

/// Storage key the task collection is kept under.
pub const DEFAULT_STORAGE_KEY: &str = "tasks";

#[async_trait]
pub trait Repository {
    async fn tasks(&self) -> Vec<Task>;
    async fn find_task(&self, key: &str) -> Option<Task>;
    async fn add_task(&self, data: NewTaskData, now: DateTime<Utc>) -> Result<Task, CoreError>;
    async fn update_task(&self, key: &str, data: UpdateTaskData) -> Result<Task, CoreError>;
    async fn delete_task(&self, key: &str) -> Result<Task, CoreError>;
}

/// The task collection, loaded once and rewritten whole after each change.
///
/// Newly added tasks go to the front of the list.
pub struct TaskRepository<S> {
    storage: S,
    storage_key: String,
    tasks: Mutex<Vec<Task>>,
}

impl<S: KeyValueStorage> TaskRepository<S> {
    pub async fn open(storage: S, storage_key: impl Into<String>) -> Result<Self, CoreError> {
        let storage_key = storage_key.into();
        let tasks = match storage.get_item(&storage_key).await? {
            Some(raw) => serde_json::from_str::<Vec<Task>>(&raw)?,
            None => Vec::new(),
        };
        tracing::debug!(key = %storage_key, count = tasks.len(), "loaded task collection");

        Ok(Self {
            storage,
            storage_key,
            tasks: Mutex::new(tasks),
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    async fn save(&self, tasks: &[Task]) -> Result<(), CoreError> {
        let raw = serde_json::to_string(tasks)?;
        self.storage.set_item(&self.storage_key, raw).await
    }
}

fn validate_text(text: &str) -> Result<String, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput(
            "Task text must not be empty.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl<S: KeyValueStorage> Repository for TaskRepository<S> {
    async fn tasks(&self) -> Vec<Task> {
        self.tasks.lock().await.clone()
    }

    async fn find_task(&self, key: &str) -> Option<Task> {
        self.tasks.lock().await.iter().find(|t| t.key == key).cloned()
    }

    async fn add_task(&self, data: NewTaskData, now: DateTime<Utc>) -> Result<Task, CoreError> {
        let text = validate_text(&data.text)?;
        let deadline = deadline::canonicalize(data.deadline)?;
        let mut tasks = self.tasks.lock().await;

        let task = Task {
            key: generate_key(now, tasks.iter().map(|t| t.key.as_str())),
            text,
            deadline,
        };

        let mut updated = Vec::with_capacity(tasks.len() + 1);
        updated.push(task.clone());
        updated.extend(tasks.iter().cloned());
        self.save(&updated).await?;
        *tasks = updated;

        tracing::info!(key = %task.key, deadline = %task.deadline, "task added");
        Ok(task)
    }

    async fn update_task(&self, key: &str, data: UpdateTaskData) -> Result<Task, CoreError> {
        let text = data.text.as_deref().map(validate_text).transpose()?;
        let deadline = data.deadline.map(deadline::canonicalize).transpose()?;
        let mut tasks = self.tasks.lock().await;

        let mut updated = tasks.clone();
        let task = updated
            .iter_mut()
            .find(|t| t.key == key)
            .ok_or_else(|| CoreError::NotFound(key.to_string()))?;
        if let Some(text) = text {
            task.text = text;
        }
        if let Some(deadline) = deadline {
            task.deadline = deadline;
        }
        let task = task.clone();

        self.save(&updated).await?;
        *tasks = updated;

        tracing::info!(key = %task.key, "task updated");
        Ok(task)
    }

    async fn delete_task(&self, key: &str) -> Result<Task, CoreError> {
        let mut tasks = self.tasks.lock().await;
        let position = tasks
            .iter()
            .position(|t| t.key == key)
            .ok_or_else(|| CoreError::NotFound(key.to_string()))?;

        let mut updated = tasks.clone();
        let removed = updated.remove(position);
        self.save(&updated).await?;
        *tasks = updated;

        tracing::info!(key = %removed.key, "task deleted");
        Ok(removed)
    }
}
