//! Conversions between `HH:mm` wall-clock strings and minute offsets from
//! midnight.
//!
//! Parsing never fails: anything that is not a valid 24-hour `HH:mm` value
//! is reported as a warning and read as minute `0`.

use chrono::{NaiveTime, Timelike};

use crate::logging::{self, LogTarget, Logger};

const CLOCK_FORMAT: &str = "%H:%M";

/// Minutes since midnight for `time`, or `0` (with a warning on the global
/// logger) when it is absent or malformed.
///
/// Surrounding whitespace is ignored and a single-digit hour is accepted, so
/// `" 9:05 "` reads as `545`. Such input does not round-trip: formatting the
/// result gives the canonical `"09:05"`.
pub fn time_to_minutes(time: Option<&str>) -> u32 {
    time_to_minutes_with(logging::global(), time)
}

pub fn time_to_minutes_with(logger: &Logger, time: Option<&str>) -> u32 {
    match time.and_then(parse_clock) {
        Some(minutes) => minutes,
        None => {
            logger.warn(
                format!("Invalid time value {time:?}; expected HH:mm. Using 00:00."),
                LogTarget::ConsoleAndFile,
            );
            0
        }
    }
}

fn parse_clock(raw: &str) -> Option<u32> {
    let parsed = NaiveTime::parse_from_str(raw.trim(), CLOCK_FORMAT).ok()?;
    Some(parsed.hour() * 60 + parsed.minute())
}

/// Zero-padded `HH:mm` for a minute offset. Offsets past `23:59` keep
/// counting hours (`1500` -> `"25:00"`).
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
