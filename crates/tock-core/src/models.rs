use crate::deadline;
use crate::error::CoreError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted task record.
///
/// The serialized shape is the storage contract: `key`, `text` and the
/// deadline as a canonical `YYYY-MM-DD HH:mm` string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub key: String,
    pub text: String,
    pub deadline: String,
}

impl Task {
    /// The deadline as a timestamp, failing if the stored string is malformed.
    pub fn deadline_at(&self) -> Result<NaiveDateTime, CoreError> {
        deadline::parse(&self.deadline)
    }

    /// A task with an unreadable deadline is never reported as overdue.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        deadline::parse_or_unset(&self.deadline)
            .is_some_and(|d| d < deadline::truncate_to_minute(now))
    }
}

#[derive(Debug, Clone)]
pub struct NewTaskData {
    pub text: String,
    pub deadline: NaiveDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTaskData {
    pub text: Option<String>,
    pub deadline: Option<NaiveDateTime>,
}

impl UpdateTaskData {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.deadline.is_none()
    }
}

/// Builds a key from the creation instant in epoch milliseconds.
///
/// Collisions with `existing` are resolved by moving forward one millisecond
/// at a time.
pub fn generate_key<'a, I>(now: DateTime<Utc>, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<&str> = existing.into_iter().collect();
    let mut millis = now.timestamp_millis();
    loop {
        let key = millis.to_string();
        if !taken.contains(&key.as_str()) {
            return key;
        }
        millis += 1;
    }
}
