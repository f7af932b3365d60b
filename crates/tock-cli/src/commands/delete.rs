use anyhow::Result;
use dialoguer::Confirm;
use tock_core::repository::Repository;

use crate::cli::DeleteCommand;
use crate::util::resolve_task;

pub async fn delete_task(repo: &(impl Repository + Sync), command: DeleteCommand) -> Result<()> {
    let task = resolve_task(repo, &command.key).await?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!("Are you sure you want to delete task '{}'?", task.text))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let removed = repo.delete_task(&task.key).await?;
    println!("Deleted task '{}'", removed.text);
    Ok(())
}
