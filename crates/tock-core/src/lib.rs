//! # Tock Core Library
//!
//! Deadline rules and a locally persisted task collection.
//!
//! ## Core Modules
//!
//! - [`deadline`]: Parsing, formatting and "is this in the past" rules for deadlines
//! - [`models`]: The persisted task record and transfer objects
//! - [`storage`]: Key-value string storage (file-backed or in memory)
//! - [`repository`]: The task collection, rewritten whole on every change
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tock_core::{
//!     deadline, models::NewTaskData,
//!     repository::{Repository, TaskRepository, DEFAULT_STORAGE_KEY},
//!     storage::FileStorage,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let storage = FileStorage::new("tock.json");
//!     let repo = TaskRepository::open(storage, DEFAULT_STORAGE_KEY).await?;
//!
//!     let task = repo
//!         .add_task(
//!             NewTaskData {
//!                 text: "Buy milk".to_string(),
//!                 deadline: deadline::parse("2099-01-01 09:00")?,
//!             },
//!             chrono::Utc::now(),
//!         )
//!         .await?;
//!     println!("Created task {} due {}", task.key, task.deadline);
//!
//!     Ok(())
//! }
//! ```

pub mod deadline;
pub mod error;
pub mod models;
pub mod repository;
pub mod storage;
