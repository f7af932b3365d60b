use anyhow::{anyhow, Result};
use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_english::{parse_date_string, Dialect};
use tock_core::deadline;
use tock_core::error::CoreError;

/// Turns user input into a deadline.
///
/// The canonical `YYYY-MM-DD HH:mm` form is tried first, then natural
/// language ("tomorrow 9am", "friday 17:00") relative to `now`.
pub fn parse_deadline_input(input: &str, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let input = input.trim();
    if let Ok(ts) = deadline::parse(input) {
        return Ok(ts);
    }

    // Wall-clock arithmetic: treat the naive time as UTC so no offset applies.
    let anchor = Utc.from_utc_datetime(&now);
    parse_date_string(input, anchor, Dialect::Uk)
        .map(|dt| deadline::truncate_to_minute(dt.naive_utc()))
        .map_err(|e| anyhow!(CoreError::InvalidInput(format!(
            "Failed to parse deadline '{}': {}",
            input, e
        ))))
}

/// Parses a deadline and refuses anything already in the past.
pub fn parse_future_deadline(input: &str, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let candidate = parse_deadline_input(input, now)?;
    ensure_allowed(candidate, now)?;
    Ok(candidate)
}

pub fn ensure_allowed(candidate: NaiveDateTime, now: NaiveDateTime) -> Result<()> {
    if deadline::is_disallowed(candidate, now) {
        return Err(anyhow!(CoreError::InvalidInput(format!(
            "Deadline {} is in the past.",
            deadline::format(candidate)
        ))));
    }
    Ok(())
}
