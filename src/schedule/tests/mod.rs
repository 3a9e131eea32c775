
use crate::core::aliases::WeekSchedule;
use crate::core::types::{DayOfWeek, TimeRange};
use strum::IntoEnumIterator;

pub(super) fn week(entries: &[(DayOfWeek, &[(&str, &str)])]) -> WeekSchedule {
    entries
        .iter()
        .map(|(day, ranges)| {
            let ranges = ranges.iter().map(|(s, e)| TimeRange::new(*s, *e)).collect();
            (*day, ranges)
        })
        .collect()
}

pub(super) fn every_day(start: &str, end: &str) -> WeekSchedule {
    DayOfWeek::iter()
        .map(|day| (day, vec![TimeRange::new(start, end)]))
        .collect()
}
