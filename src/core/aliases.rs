use std::collections::BTreeMap;

use crate::core::types::{DayOfWeek, TimeRange};

pub type CourtId = u32;
/// Open intervals of one weekday, e.g. a morning and an evening block.
pub type DaySchedule = Vec<TimeRange>;
/// Weekday -> open intervals. A missing day is a closed day.
pub type WeekSchedule = BTreeMap<DayOfWeek, DaySchedule>;
