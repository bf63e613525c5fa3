// src/github/window.rs
// =============================================================================
// The since/until bounds of a calendar year, as GitHub wants them.
//
// The year runs from local midnight on January 1st to local 23:59:59 on
// December 31st. Both instants are then written in UTC ISO-8601 form with
// milliseconds, e.g. "2021-01-01T00:00:00.000Z" for a UTC machine.
//
// Rust concepts:
// - Generic over chrono's TimeZone trait, so tests can pin a fixed offset
//   while the real run uses the machine's Local zone
// =============================================================================

use chrono::{DateTime, Local, TimeZone, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "{year}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02} \
     does not exist in the local time zone"
)]
pub struct YearWindowError {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearWindow {
    pub since: String,
    pub until: String,
}

impl YearWindow {
    // The window for `year` in the machine's local time zone
    pub fn local(year: i32) -> Result<Self, YearWindowError> {
        Self::in_timezone(year, &Local)
    }

    pub fn in_timezone<Tz: TimeZone>(year: i32, tz: &Tz) -> Result<Self, YearWindowError> {
        // First and last second of the year on the wall clock of `tz`
        Ok(Self {
            since: utc_instant(tz, year, 1, 1, 0, 0, 0)?,
            until: utc_instant(tz, year, 12, 31, 23, 59, 59)?,
        })
    }

    // Query string for the commits endpoint
    pub fn query(&self) -> String {
        format!("since={}&until={}", self.since, self.until)
    }
}

fn utc_instant<Tz: TimeZone>(
    tz: &Tz,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<String, YearWindowError> {
    // A local time can be ambiguous (clocks going back) or missing (clocks
    // going forward); take the earlier instant, fail only if there is none
    tz.with_ymd_and_hms(year, month, day, hour, minute, second)
        .earliest()
        .map(|local| format_instant(local.with_timezone(&Utc)))
        .ok_or(YearWindowError {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
}

// "%.3f" always prints three fractional digits, like ".000"
fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_utc_window() {
        let window = YearWindow::in_timezone(2021, &Utc).unwrap();
        assert_eq!(window.since, "2021-01-01T00:00:00.000Z");
        assert_eq!(window.until, "2021-12-31T23:59:59.000Z");
    }

    #[test]
    fn test_window_east_of_utc() {
        let berlin_winter = FixedOffset::east_opt(3600).unwrap();
        let window = YearWindow::in_timezone(2021, &berlin_winter).unwrap();
        assert_eq!(window.since, "2020-12-31T23:00:00.000Z");
        assert_eq!(window.until, "2021-12-31T22:59:59.000Z");
    }

    #[test]
    fn test_window_west_of_utc() {
        let new_york_winter = FixedOffset::west_opt(5 * 3600).unwrap();
        let window = YearWindow::in_timezone(2024, &new_york_winter).unwrap();
        assert_eq!(window.since, "2024-01-01T05:00:00.000Z");
        assert_eq!(window.until, "2025-01-01T04:59:59.000Z");
    }

    #[test]
    fn test_query() {
        let window = YearWindow::in_timezone(2021, &Utc).unwrap();
        assert_eq!(
            window.query(),
            "since=2021-01-01T00:00:00.000Z&until=2021-12-31T23:59:59.000Z"
        );
    }
}
