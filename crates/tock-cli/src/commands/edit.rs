use anyhow::{anyhow, Result};
use owo_colors::OwoColorize;
use tock_core::deadline;
use tock_core::error::CoreError;
use tock_core::models::UpdateTaskData;
use tock_core::repository::Repository;

use crate::cli::EditCommand;
use crate::clock::Clock;
use crate::parser::{ensure_allowed, parse_future_deadline};
use crate::picker::pick_deadline;
use crate::util::resolve_task;

pub async fn edit_task(
    repo: &(impl Repository + Sync),
    command: EditCommand,
    clock: &Clock,
) -> Result<()> {
    let task = resolve_task(repo, &command.key).await?;

    let deadline = if command.pick {
        // A stored deadline that no longer parses just means nothing is pre-selected.
        let current = deadline::parse_or_unset(&task.deadline);
        let picked = pick_deadline(clock, current)?;
        ensure_allowed(picked, clock.now())?;
        Some(picked)
    } else {
        command
            .due
            .as_deref()
            .map(|due| parse_future_deadline(due, clock.now()))
            .transpose()?
    };

    let update = UpdateTaskData {
        text: command.text,
        deadline,
    };
    if update.is_empty() {
        return Err(anyhow!(CoreError::InvalidInput(
            "Nothing to change. Pass --text, --due or --pick.".to_string()
        )));
    }

    let updated = repo.update_task(&task.key, update).await?;
    println!("Updated task '{}'", updated.text.bold());
    if updated.deadline != task.deadline {
        println!("  Deadline: {} → {}", task.deadline.bright_black(), updated.deadline);
    }

    Ok(())
}
