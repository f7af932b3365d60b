use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use dialoguer::{Input, Select};
use tock_core::deadline;

use crate::clock::Clock;

/// Hours still selectable on `day`.
pub fn hour_choices(day: NaiveDate, now: NaiveDateTime) -> Vec<u32> {
    let blocked = deadline::disallowed_hours(day, now);
    (0..24).filter(|h| !blocked.contains(h)).collect()
}

/// Minutes still selectable within `hour` on `day`.
pub fn minute_choices(day: NaiveDate, hour: u32, now: NaiveDateTime) -> Vec<u32> {
    let blocked = deadline::disallowed_minutes(day, hour, now);
    (0..60).filter(|m| !blocked.contains(m)).collect()
}

/// Interactive deadline picker. Past days, hours and minutes are never offered.
///
/// `initial` pre-selects a previously stored deadline where it is still valid.
/// The clock is re-read before each step since time passes while prompting.
pub fn pick_deadline(clock: &Clock, initial: Option<NaiveDateTime>) -> Result<NaiveDateTime> {
    let today = clock.now().date();
    let default_day = initial
        .map(|d| d.date())
        .filter(|d| !deadline::is_disallowed_date(*d, today))
        .unwrap_or(today);

    let day_text: String = Input::new()
        .with_prompt("Deadline date (YYYY-MM-DD)")
        .default(default_day.format("%Y-%m-%d").to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            let day = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
                .map_err(|_| "Use the format YYYY-MM-DD".to_string())?;
            if deadline::is_disallowed_date(day, today) {
                return Err("That day is in the past".to_string());
            }
            Ok(())
        })
        .interact_text()?;
    let day = NaiveDate::parse_from_str(day_text.trim(), "%Y-%m-%d")?;

    let hours = hour_choices(day, clock.now());
    let hour = select_value("Hour", &hours, initial.map(|d| d.hour()))?;

    let minutes = minute_choices(day, hour, clock.now());
    let minute = select_value("Minute", &minutes, initial.map(|d| d.minute()))?;

    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| anyhow!("Invalid time {:02}:{:02}", hour, minute))?;
    Ok(day.and_time(time))
}

fn select_value(prompt: &str, values: &[u32], preferred: Option<u32>) -> Result<u32> {
    if values.is_empty() {
        return Err(anyhow!("No {} left to choose today", prompt.to_lowercase()));
    }
    let items: Vec<String> = values.iter().map(|v| format!("{:02}", v)).collect();
    let default = preferred
        .and_then(|p| values.iter().position(|v| *v == p))
        .unwrap_or(0);

    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact()?;
    Ok(values[index])
}
