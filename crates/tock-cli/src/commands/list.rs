use anyhow::Result;
use tock_core::models::Task;
use tock_core::repository::Repository;

use crate::cli::ListCommand;
use crate::clock::Clock;
use crate::views::table::{display_tasks, ViewTask};

pub async fn list_tasks(
    repo: &(impl Repository + Sync),
    command: ListCommand,
    clock: &Clock,
) -> Result<()> {
    let now = clock.now();
    let tasks: Vec<Task> = repo
        .tasks()
        .await
        .into_iter()
        .filter(|t| !command.overdue || t.is_overdue(now))
        .collect();

    if command.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    let view_tasks: Vec<ViewTask> = tasks.into_iter().map(ViewTask::from).collect();
    display_tasks(&view_tasks, now);

    Ok(())
}
