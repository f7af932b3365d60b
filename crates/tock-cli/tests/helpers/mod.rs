use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test harness for running CLI commands against a temporary storage file
pub struct CliTestHarness {
    temp_dir: TempDir,
    storage_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with a temporary storage file
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let storage_path = temp_dir.path().join("tock.json");

        Self {
            temp_dir,
            storage_path,
        }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tock").expect("Failed to find tock binary");

        // Keep any tock.toml in the developer's working directory out of the way
        cmd.current_dir(self.temp_dir.path());
        cmd.env("TOCK_STORAGE_PATH", &self.storage_path);
        cmd.env("TOCK_TIMEZONE", "UTC");
        cmd.env_remove("TOCK_STORAGE_KEY");

        cmd
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// The task records currently persisted under the "tasks" key
    pub fn stored_tasks(&self) -> Vec<serde_json::Value> {
        let file = std::fs::read_to_string(&self.storage_path).expect("storage file should exist");
        let entries: serde_json::Value = serde_json::from_str(&file).expect("storage file is JSON");
        let raw = entries["tasks"].as_str().expect("tasks entry is a string");
        serde_json::from_str(raw).expect("tasks entry holds a JSON array")
    }

    /// Key of the most recently added task
    pub fn newest_key(&self) -> String {
        self.stored_tasks()[0]["key"]
            .as_str()
            .expect("task key is a string")
            .to_string()
    }

    /// Seed the storage file directly, bypassing the CLI
    pub fn seed_tasks(&self, tasks_json: &str) {
        let entries = serde_json::json!({ "tasks": tasks_json });
        std::fs::write(&self.storage_path, entries.to_string()).expect("Failed to seed storage");
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains task table headers
    pub fn has_task_table_headers() -> impl Predicate<str> {
        predicate::str::contains("Key")
            .and(predicate::str::contains("Task"))
            .and(predicate::str::contains("Deadline"))
    }

    /// Predicate to check if output indicates successful task creation
    pub fn task_created_successfully() -> impl Predicate<str> {
        predicate::str::contains("✓").and(predicate::str::contains("Created task"))
    }

    /// Predicate to check for empty result set
    pub fn empty_result() -> impl Predicate<str> {
        predicate::str::contains("No tasks found")
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }
}
