use crate::core::aliases::{CourtId, WeekSchedule};
use crate::core::types::{DayOfWeek, TimeRange};
use crate::errors::{Error, Result};
use crate::logging::{self, Logger};
use crate::schedule::{DEFAULT_CLOSING, DEFAULT_OPENING, envelope_of};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    pub id: CourtId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub court_id: CourtId,
    pub day: DayOfWeek,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub label: Option<String>,
    /// `[start, end)` in minutes, filled in when the branch is loaded.
    #[serde(skip)]
    span: Option<(u32, u32)>,
}

impl Booking {
    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.start.clone(), self.end.clone())
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("Booked")
    }

    fn resolve(&mut self, logger: &Logger) {
        let range = self.time_range();
        self.span = Some((range.start_minutes_with(logger), range.end_minutes_with(logger)));
    }

    fn span(&self) -> (u32, u32) {
        self.span.unwrap_or_else(|| {
            let range = self.time_range();
            (range.start_minutes(), range.end_minutes())
        })
    }

    /// Whether this booking occupies any part of `[start, start + len)`.
    /// The window end saturates at `u32::MAX`.
    pub fn occupies(&self, start: u32, len: u32) -> bool {
        let (from, to) = self.span();
        start < to && from < start.saturating_add(len)
    }
}

/// One branch as handed over by the branch provider. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub courts: Vec<Court>,
    #[serde(default)]
    pub schedule: Option<WeekSchedule>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    /// Per-day open windows in minutes, resolved at load.
    #[serde(skip)]
    open: BTreeMap<DayOfWeek, Vec<(u32, u32)>>,
    #[serde(skip)]
    envelope: Option<TimeRange>,
}

impl Branch {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::branch(format!(
                "Branch file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(path)
            .map_err(|e| Error::branch(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_json_with(logging::global(), text)
    }

    /// Parses and validates the branch, then resolves every schedule and
    /// booking time once. Malformed times are reported to `logger` here and
    /// read as `00:00` from then on.
    pub fn from_json_with(logger: &Logger, text: &str) -> Result<Self> {
        let mut branch: Branch = serde_json::from_str(text)?;
        branch.validate()?;
        branch.resolve(logger);
        Ok(branch)
    }

    fn resolve(&mut self, logger: &Logger) {
        for booking in &mut self.bookings {
            booking.resolve(logger);
        }
        self.open = self
            .schedule
            .iter()
            .flatten()
            .map(|(day, ranges)| {
                let windows = ranges
                    .iter()
                    .map(|r| (r.start_minutes_with(logger), r.end_minutes_with(logger)))
                    .collect();
                (*day, windows)
            })
            .collect();
        self.envelope = Some(match &self.schedule {
            None => TimeRange::new(DEFAULT_OPENING, DEFAULT_CLOSING),
            Some(_) => envelope_of(logger, self.open.values().flatten().copied()),
        });
    }

    fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for court in &self.courts {
            if !ids.insert(court.id) {
                return Err(Error::branch(format!(
                    "Court id {} is listed more than once.",
                    court.id
                )));
            }
        }
        for booking in &self.bookings {
            if !ids.contains(&booking.court_id) {
                return Err(Error::UnknownCourt {
                    booking: booking.label().to_string(),
                    court_id: booking.court_id,
                });
            }
        }
        Ok(())
    }

    /// Open intervals for `day`; empty when the day is closed or no schedule
    /// was configured.
    pub fn day_schedule(&self, day: DayOfWeek) -> &[TimeRange] {
        self.schedule
            .as_ref()
            .and_then(|s| s.get(&day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Business-hours envelope of the week schedule.
    pub fn envelope(&self) -> TimeRange {
        match &self.envelope {
            Some(envelope) => envelope.clone(),
            None => crate::schedule::business_hours(self.schedule.as_ref()),
        }
    }

    /// Without a schedule every day counts as open.
    pub fn is_open(&self, day: DayOfWeek, minute: u32) -> bool {
        if self.schedule.is_none() {
            return true;
        }
        self.open
            .get(&day)
            .is_some_and(|windows| windows.iter().any(|&(s, e)| s <= minute && minute < e))
    }

    pub fn booking_at(
        &self,
        court_id: CourtId,
        day: DayOfWeek,
        start: u32,
        len: u32,
    ) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|b| b.court_id == court_id && b.day == day && b.occupies(start, len))
    }
}
