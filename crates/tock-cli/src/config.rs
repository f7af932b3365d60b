use chrono_tz::Tz;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use tock_core::repository::DEFAULT_STORAGE_KEY;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// File that plays the role of local storage
    pub storage_path: PathBuf,
    /// Key the task collection is stored under
    pub storage_key: String,
    /// IANA timezone used for "now"; the system timezone when unset
    pub timezone: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("tock.json"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            timezone: None,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("tock.toml"))
            .merge(Env::prefixed("TOCK_"))
    }
}

/// Validates that a timezone string is a valid IANA timezone name
pub fn validate_timezone(timezone: &str) -> Result<Tz, String> {
    Tz::from_str(timezone).map_err(|_| {
        format!(
            "Invalid timezone: '{}'. Use IANA timezone names like 'Europe/Berlin'. \
             Close matches: {}",
            timezone,
            suggest_timezone(timezone).join(", ")
        )
    })
}

/// Gets a list of common/popular timezones for user selection
pub fn get_common_timezones() -> Vec<&'static str> {
    vec![
        "UTC",
        "America/New_York",
        "America/Chicago",
        "America/Denver",
        "America/Los_Angeles",
        "America/Sao_Paulo",
        "Europe/London",
        "Europe/Paris",
        "Europe/Berlin",
        "Asia/Ho_Chi_Minh",
        "Asia/Tokyo",
        "Asia/Shanghai",
        "Asia/Kolkata",
        "Australia/Sydney",
        "Pacific/Auckland",
    ]
}

/// Suggests similar timezone names when validation fails
pub fn suggest_timezone(invalid_tz: &str) -> Vec<String> {
    let common = get_common_timezones();
    let lower_invalid = invalid_tz.to_lowercase();

    let suggestions: Vec<String> = common
        .iter()
        .filter(|tz| {
            let lower_tz = tz.to_lowercase();
            !lower_invalid.is_empty()
                && (lower_tz.contains(&lower_invalid) || lower_invalid.contains(&lower_tz))
        })
        .map(|tz| tz.to_string())
        .collect();

    if suggestions.is_empty() {
        return common.iter().take(5).map(|s| s.to_string()).collect();
    }
    suggestions
}
