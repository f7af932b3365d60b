use crate::config::{validate_timezone, Config};
use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// The single place the CLI reads the wall clock.
///
/// Deadlines are naive wall-clock times, so "now" is expressed the same way:
/// local time in the configured timezone, else the detected system zone.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    timezone: Option<Tz>,
}

impl Clock {
    pub fn from_config(config: &Config) -> Result<Self> {
        let timezone = match config.timezone.as_deref() {
            Some(name) => Some(validate_timezone(name).map_err(|e| anyhow!(e))?),
            None => detect_system_timezone(),
        };
        tracing::debug!(timezone = ?timezone, "clock initialised");
        Ok(Self { timezone })
    }

    pub fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.wall_clock_at(self.now_utc())
    }

    fn wall_clock_at(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self.timezone {
            Some(tz) => instant.with_timezone(&tz).naive_local(),
            None => instant.with_timezone(&Local).naive_local(),
        }
    }
}

/// Detects the system timezone, leaving it to chrono's `Local` when detection fails
fn detect_system_timezone() -> Option<Tz> {
    if let Ok(tz) = std::env::var("TZ") {
        if let Ok(tz) = tz.parse() {
            return Some(tz);
        }
    }
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse().ok())
}
