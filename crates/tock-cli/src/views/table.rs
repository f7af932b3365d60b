use chrono::NaiveDateTime;
use chrono_humanize::{Accuracy, HumanTime, Tense};
use comfy_table::{Attribute, Cell, Color, Row, Table};
use tock_core::deadline;
use tock_core::models::Task;

#[derive(Debug, Clone)]
pub struct ViewTask {
    pub key: String,
    pub text: String,
    pub deadline: String,
    pub due_at: Option<NaiveDateTime>,
}

impl From<Task> for ViewTask {
    fn from(task: Task) -> Self {
        let due_at = deadline::parse_or_unset(&task.deadline);
        Self {
            key: task.key,
            text: task.text,
            deadline: task.deadline,
            due_at,
        }
    }
}

/// Relative description of a deadline, e.g. "in 2 hours" or "3 days ago".
pub fn relative_due(due_at: NaiveDateTime, now: NaiveDateTime) -> String {
    let delta = due_at - deadline::truncate_to_minute(now);
    let tense = if delta < chrono::Duration::zero() {
        Tense::Past
    } else {
        Tense::Future
    };
    HumanTime::from(delta).to_text_en(Accuracy::Rough, tense)
}

pub fn display_tasks(tasks: &[ViewTask], now: NaiveDateTime) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Key", "Task", "Deadline", "Due"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(&task.key).fg(Color::DarkGrey));
        row.add_cell(Cell::new(&task.text).add_attribute(Attribute::Bold));

        match task.due_at {
            Some(due_at) => {
                let color = if due_at < deadline::truncate_to_minute(now) {
                    Some(Color::Red) // Overdue
                } else if due_at.date() == now.date() {
                    Some(Color::Yellow) // Due today
                } else {
                    None
                };
                let mut deadline_cell = Cell::new(&task.deadline);
                let mut due_cell = Cell::new(relative_due(due_at, now));
                if let Some(color) = color {
                    deadline_cell = deadline_cell.fg(color);
                    due_cell = due_cell.fg(color);
                }
                row.add_cell(deadline_cell);
                row.add_cell(due_cell);
            }
            None => {
                row.add_cell(Cell::new(&task.deadline).add_attribute(Attribute::CrossedOut));
                row.add_cell(Cell::new("Unset"));
            }
        }
        table.add_row(row);
    }

    println!("{table}");
}
