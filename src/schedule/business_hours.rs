use crate::core::aliases::WeekSchedule;
use crate::core::time::{minutes_to_time, time_to_minutes_with};
use crate::core::types::TimeRange;
use crate::logging::{self, Logger};

/// Opening time used when no range ever moved the start.
pub const DEFAULT_OPENING: &str = "07:00";
/// Closing time used when no range ever moved the end.
pub const DEFAULT_CLOSING: &str = "23:00";

/// A start must be strictly earlier than this to count.
const START_SEED: &str = "23:59";
/// An end must be strictly later than this to count.
const END_SEED: &str = "00:00";

/// Earliest start and latest end across every range of every day.
///
/// Without a schedule the default `07:00-23:00` envelope is returned as-is.
/// Each side falls back to its default independently when no range improved
/// on the seed. A degenerate schedule is kept: ranges that are all
/// `10:00-10:00` yield `10:00-10:00`.
pub fn business_hours(schedule: Option<&WeekSchedule>) -> TimeRange {
    business_hours_with(logging::global(), schedule)
}

pub fn business_hours_with(logger: &Logger, schedule: Option<&WeekSchedule>) -> TimeRange {
    let Some(schedule) = schedule else {
        return TimeRange::new(DEFAULT_OPENING, DEFAULT_CLOSING);
    };
    envelope_of(
        logger,
        schedule
            .values()
            .flatten()
            .map(|range| (range.start_minutes_with(logger), range.end_minutes_with(logger))),
    )
}

/// The same fold over ranges already resolved to minute offsets. No ranges
/// gives the default envelope.
pub fn envelope_of<I>(logger: &Logger, ranges: I) -> TimeRange
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let start_seed = time_to_minutes_with(logger, Some(START_SEED));
    let end_seed = time_to_minutes_with(logger, Some(END_SEED));

    let (earliest, latest) =
        ranges
            .into_iter()
            .fold((None, None), |(earliest, latest), (start, end)| {
                (
                    improve(earliest, start, start_seed, |a, b| a < b),
                    improve(latest, end, end_seed, |a, b| a > b),
                )
            });

    TimeRange::new(
        earliest.map_or_else(|| DEFAULT_OPENING.to_string(), minutes_to_time),
        latest.map_or_else(|| DEFAULT_CLOSING.to_string(), minutes_to_time),
    )
}

fn improve(
    current: Option<u32>,
    candidate: u32,
    seed: u32,
    better: fn(u32, u32) -> bool,
) -> Option<u32> {
    if better(candidate, current.unwrap_or(seed)) {
        Some(candidate)
    } else {
        current
    }
}
