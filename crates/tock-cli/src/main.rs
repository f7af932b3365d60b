use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tock_core::error::CoreError;
use tock_core::repository::TaskRepository;
use tock_core::storage::FileStorage;
use tracing_subscriber::EnvFilter;

mod cli;
mod clock;
mod commands;
mod config;
mod parser;
mod picker;
mod util;
mod views;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TOCK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    if let Err(e) = run(cli).await {
        handle_error(e);
        std::process::exit(1);
    }
}

async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let config = config::Config::new()?;
    let clock = clock::Clock::from_config(&config)?;

    let storage = FileStorage::new(&config.storage_path);
    tracing::debug!(
        path = %storage.path().display(),
        key = %config.storage_key,
        "opening task storage"
    );
    let repository = TaskRepository::open(storage, config.storage_key.as_str()).await?;

    match cli.command {
        cli::Commands::Add(command) => {
            commands::add::add_task(&repository, command, &clock).await
        }
        cli::Commands::List(command) => {
            commands::list::list_tasks(&repository, command, &clock).await
        }
        cli::Commands::Edit(command) => {
            commands::edit::edit_task(&repository, command, &clock).await
        }
        cli::Commands::Delete(command) => {
            commands::delete::delete_task(&repository, command).await
        }
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.chain().find_map(|e| e.downcast_ref::<CoreError>()) {
        Some(CoreError::NotFound(s)) => {
            eprintln!("{} {}", "Error:".style(error_style), s);
        }
        Some(CoreError::InvalidFormat(s)) => {
            eprintln!(
                "{} Invalid deadline '{}'. Use the format YYYY-MM-DD HH:mm.",
                "Error:".style(error_style),
                s.yellow()
            );
        }
        Some(CoreError::AmbiguousKey(tasks)) => {
            eprintln!("{}", "Error: Ambiguous task key.".style(error_style));
            eprintln!("Did you mean one of these?");
            for (key, text) in tasks {
                eprintln!("  {} ({})", key.yellow(), text);
            }
        }
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
        }
        Some(CoreError::Serialization(e)) => {
            eprintln!(
                "{} The task storage is corrupt and could not be read: {}",
                "Error:".style(error_style),
                e
            );
        }
        _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
