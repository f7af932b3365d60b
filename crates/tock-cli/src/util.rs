use anyhow::{anyhow, Result};
use tock_core::error::CoreError;
use tock_core::models::Task;
use tock_core::repository::Repository;

/// Resolves a full task key, or a unique suffix of one, to its task.
///
/// Keys are creation timestamps, so their trailing digits tell tasks apart.
pub async fn resolve_task(repo: &(impl Repository + Sync), key: &str) -> Result<Task> {
    if let Some(task) = repo.find_task(key).await {
        return Ok(task);
    }
    if key.len() < 3 {
        return Err(anyhow!(CoreError::InvalidInput(
            "Key suffix must be at least 3 characters long.".to_string()
        )));
    }

    let mut matches: Vec<Task> = repo
        .tasks()
        .await
        .into_iter()
        .filter(|t| t.key.ends_with(key))
        .collect();
    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(anyhow!(CoreError::NotFound(format!(
            "No task found with key '{}'",
            key
        )))),
        _ => Err(anyhow!(CoreError::AmbiguousKey(
            matches.into_iter().map(|t| (t.key, t.text)).collect()
        ))),
    }
}
