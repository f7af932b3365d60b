use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use tock_core::models::NewTaskData;
use tock_core::repository::Repository;

use crate::cli::AddCommand;
use crate::clock::Clock;
use crate::parser::{ensure_allowed, parse_future_deadline};
use crate::picker::pick_deadline;

pub async fn add_task(
    repo: &(impl Repository + Sync),
    command: AddCommand,
    clock: &Clock,
) -> Result<()> {
    let deadline = match command.due.as_deref() {
        Some(due) => parse_future_deadline(due, clock.now())?,
        None => {
            let picked = pick_deadline(clock, None)?;
            ensure_allowed(picked, clock.now())?;
            picked
        }
    };

    let task = repo
        .add_task(
            NewTaskData {
                text: command.text,
                deadline,
            },
            clock.now_utc(),
        )
        .await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    println!("{} Created task: {}", "✓".style(success_style), task.text.bold());
    println!("  {} Task key: {}", "→".style(info_style), task.key.yellow());
    println!("  {} Deadline: {}", "→".style(info_style), task.deadline);

    Ok(())
}
