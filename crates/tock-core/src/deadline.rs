//! Deadline rules.
//!
//! Deadlines are naive wall-clock timestamps with minute precision, persisted
//! as `YYYY-MM-DD HH:mm`. Every rule that depends on the current moment takes
//! `now` as an argument; nothing in this module reads the system clock.

use crate::error::CoreError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::collections::BTreeSet;

/// Canonical storage layout for deadlines.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M";

const DEADLINE_LEN: usize = 16;

/// Years that fit the four-digit `YYYY` field.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Parses a stored deadline string.
///
/// Only the exact, zero-padded `YYYY-MM-DD HH:mm` layout is accepted. Extra
/// whitespace, seconds, offsets and calendar-invalid values are rejected with
/// [`CoreError::InvalidFormat`].
pub fn parse(stored: &str) -> Result<NaiveDateTime, CoreError> {
    if !has_canonical_shape(stored) {
        return Err(CoreError::InvalidFormat(stored.to_string()));
    }
    NaiveDateTime::parse_from_str(stored, DEADLINE_FORMAT)
        .map_err(|_| CoreError::InvalidFormat(stored.to_string()))
}

/// Formats a timestamp into the canonical storage string. Seconds are dropped.
///
/// Only timestamps for which [`is_representable`] holds read back through
/// [`parse`]; chrono writes other years with a sign and extra digits.
pub fn format(ts: NaiveDateTime) -> String {
    truncate_to_minute(ts).format(DEADLINE_FORMAT).to_string()
}

/// True when the year of `ts` fits the canonical layout.
pub fn is_representable(ts: NaiveDateTime) -> bool {
    YEAR_RANGE.contains(&ts.year())
}

/// Canonical string for `ts`, refusing years the layout cannot hold.
pub fn canonicalize(ts: NaiveDateTime) -> Result<String, CoreError> {
    if !is_representable(ts) {
        return Err(CoreError::InvalidInput(format!(
            "Deadline year {} is outside 0000-9999.",
            ts.year()
        )));
    }
    Ok(format(ts))
}

/// Parses a stored deadline, treating anything unparseable as "no deadline selected".
pub fn parse_or_unset(stored: &str) -> Option<NaiveDateTime> {
    match parse(stored) {
        Ok(ts) => Some(ts),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring unparseable deadline");
            None
        }
    }
}

pub fn truncate_to_minute(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

/// True when `candidate` lies before the start of `now`'s calendar day.
pub fn is_disallowed_date(candidate: NaiveDate, now: NaiveDate) -> bool {
    candidate < now
}

/// Hours that can no longer be picked on `candidate_day`.
///
/// Only today is restricted; every hour before the current one is excluded.
pub fn disallowed_hours(candidate_day: NaiveDate, now: NaiveDateTime) -> BTreeSet<u32> {
    if candidate_day != now.date() {
        return BTreeSet::new();
    }
    (0..now.hour()).collect()
}

/// Minutes that can no longer be picked within `candidate_hour` of `candidate_day`.
pub fn disallowed_minutes(
    candidate_day: NaiveDate,
    candidate_hour: u32,
    now: NaiveDateTime,
) -> BTreeSet<u32> {
    if candidate_day != now.date() || candidate_hour != now.hour() {
        return BTreeSet::new();
    }
    (0..now.minute()).collect()
}

/// Combined check used before a deadline is submitted.
///
/// The current minute itself is still selectable.
pub fn is_disallowed(candidate: NaiveDateTime, now: NaiveDateTime) -> bool {
    let day = candidate.date();
    is_disallowed_date(day, now.date())
        || disallowed_hours(day, now).contains(&candidate.hour())
        || disallowed_minutes(day, candidate.hour(), now).contains(&candidate.minute())
}

fn has_canonical_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == DEADLINE_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;
    use rstest::rstest;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    mod parse_and_format {
        use super::*;

        #[test]
        fn parses_canonical_string() {
            let ts = parse("2099-01-01 09:00").unwrap();
            assert_eq!(ts, at("2099-01-01 09:00:00"));
        }

        #[test]
        fn format_drops_seconds() {
            assert_eq!(format(at("2024-05-01 14:30:59")), "2024-05-01 14:30");
        }

        #[test]
        fn buy_milk_deadline_survives_storage() {
            let deadline = parse("2099-01-01 09:00").unwrap();
            assert_eq!(format(deadline), "2099-01-01 09:00");
        }

        #[rstest]
        #[case("")]
        #[case("2024-05-01")]
        #[case("2024-05-01 14:30:00")]
        #[case("2024-5-01 14:30")]
        #[case("2024-05-01T14:30")]
        #[case(" 2024-05-01 14:30")]
        #[case("2024-05-01 14:30 ")]
        #[case("2024-13-01 14:30")]
        #[case("2023-02-29 10:00")]
        #[case("2024-05-01 24:00")]
        #[case("2024-05-01 14:60")]
        #[case("01-05-2024 14:30")]
        #[case("not a deadline!!")]
        fn rejects_non_canonical_strings(#[case] input: &str) {
            assert!(matches!(parse(input), Err(CoreError::InvalidFormat(s)) if s == input));
        }

        #[rstest]
        #[case("0000-01-01 00:00")]
        #[case("9999-12-31 23:59")]
        fn year_bounds_round_trip(#[case] stored: &str) {
            let ts = parse(stored).unwrap();
            assert!(is_representable(ts));
            assert_eq!(canonicalize(ts).unwrap(), stored);
        }

        #[rstest]
        #[case(10000)]
        #[case(-1)]
        fn years_outside_layout_are_refused(#[case] year: i32) {
            let ts = NaiveDate::from_ymd_opt(year, 1, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap();
            assert!(!is_representable(ts));
            assert!(matches!(canonicalize(ts), Err(CoreError::InvalidInput(_))));
            assert!(parse(&format(ts)).is_err());
        }

        #[test]
        fn parse_or_unset_falls_back_to_none() {
            assert_eq!(parse_or_unset("tomorrow"), None);
            assert_eq!(parse_or_unset("2024-02-29 23:59"), Some(at("2024-02-29 23:59:00")));
        }

        proptest! {
            #[test]
            fn round_trips_every_minute(minutes in 0i64..(10_000 * 365 * 24 * 60)) {
                let t = at("0000-01-01 00:00:00") + Duration::minutes(minutes);
                prop_assert!(is_representable(t));
                prop_assert_eq!(parse(&canonicalize(t).unwrap()).unwrap(), t);
            }

            #[test]
            fn arbitrary_text_never_panics(s in "\\PC{0,24}") {
                if let Ok(ts) = parse(&s) {
                    prop_assert_eq!(format(ts), s);
                }
            }
        }
    }

    mod disallow_rules {
        use super::*;

        #[rstest]
        #[case("2024-04-30", true)]
        #[case("2024-05-01", false)]
        #[case("2024-05-02", false)]
        #[case("2023-12-31", true)]
        fn past_days_are_disallowed(#[case] candidate: &str, #[case] expected: bool) {
            assert_eq!(is_disallowed_date(day(candidate), day("2024-05-01")), expected);
        }

        #[test]
        fn hours_before_now_are_blocked_today() {
            let now = at("2024-05-01 14:30:00");
            let expected: BTreeSet<u32> = (0..=13).collect();
            assert_eq!(disallowed_hours(day("2024-05-01"), now), expected);
        }

        #[test]
        fn no_hours_are_blocked_tomorrow() {
            let now = at("2024-05-01 14:30:00");
            assert!(disallowed_hours(day("2024-05-02"), now).is_empty());
        }

        #[test]
        fn midnight_blocks_no_hours() {
            let now = at("2024-05-01 00:10:00");
            assert!(disallowed_hours(day("2024-05-01"), now).is_empty());
        }

        #[test]
        fn minutes_before_now_are_blocked_in_current_hour() {
            let now = at("2024-05-01 14:30:00");
            let expected: BTreeSet<u32> = (0..=29).collect();
            assert_eq!(disallowed_minutes(day("2024-05-01"), 14, now), expected);
        }

        #[rstest]
        #[case("2024-05-01", 15)]
        #[case("2024-05-02", 14)]
        fn minutes_are_free_outside_current_hour(#[case] candidate: &str, #[case] hour: u32) {
            let now = at("2024-05-01 14:30:00");
            assert!(disallowed_minutes(day(candidate), hour, now).is_empty());
        }

        #[rstest]
        #[case("2024-04-30 23:59:00", true)]
        #[case("2024-05-01 13:59:00", true)]
        #[case("2024-05-01 14:29:00", true)]
        #[case("2024-05-01 14:30:00", false)]
        #[case("2024-05-01 14:31:00", false)]
        #[case("2024-05-01 15:00:00", false)]
        #[case("2024-05-02 00:00:00", false)]
        fn combined_check(#[case] candidate: &str, #[case] expected: bool) {
            let now = at("2024-05-01 14:30:45");
            assert_eq!(is_disallowed(at(candidate), now), expected);
        }

        proptest! {
            #[test]
            fn rules_follow_now(offset in -10_000i64..10_000) {
                let now = at("2024-05-01 14:30:00");
                let candidate = now + Duration::minutes(offset);
                prop_assert_eq!(is_disallowed(candidate, now), offset < 0);
            }
        }
    }
}
