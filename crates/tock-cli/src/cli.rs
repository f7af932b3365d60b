use clap::{Parser, Subcommand};

/// A small task tracker with deadlines
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// List tasks
    List(ListCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Delete a task
    Delete(DeleteCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// What needs doing
    pub text: String,
    /// The deadline ("YYYY-MM-DD HH:mm" or e.g. "tomorrow 9am")
    #[clap(short, long, required_unless_present = "pick")]
    pub due: Option<String>,
    /// Pick the deadline interactively
    #[clap(long, conflicts_with = "due")]
    pub pick: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The key of the task to edit (or a unique suffix of it)
    pub key: String,

    #[arg(long)]
    pub text: Option<String>,

    #[arg(long)]
    pub due: Option<String>,
    /// Pick the new deadline interactively
    #[arg(long, conflicts_with = "due")]
    pub pick: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The key of the task to delete (or a unique suffix of it)
    pub key: String,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Only show tasks whose deadline has passed
    #[clap(long)]
    pub overdue: bool,
    /// Print the stored records as JSON instead of a table
    #[clap(long)]
    pub json: bool,
}
