use crate::core::time::minutes_to_time;
use crate::core::types::TimeRange;

/// Evenly spaced slots inside an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    start: u32,
    end: u32,
    step: u32,
}

impl SlotGrid {
    /// A zero step is treated as one minute.
    pub fn new(envelope: &TimeRange, step_minutes: u32) -> Self {
        Self {
            start: envelope.start_minutes(),
            end: envelope.end_minutes(),
            step: step_minutes.max(1),
        }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Slot start offsets `s` with `start <= s < end`. Empty for a zero-width
    /// or inverted envelope.
    pub fn starts(&self) -> Vec<u32> {
        (self.start..self.end).step_by(self.step as usize).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.starts().into_iter().map(minutes_to_time).collect()
    }

    /// Values a start/end picker may offer: every slot boundary from `start`
    /// up to and including `end`.
    pub fn picker_options(&self) -> Vec<String> {
        (self.start..=self.end.max(self.start))
            .step_by(self.step as usize)
            .map(minutes_to_time)
            .collect()
    }

    /// Pulls `minutes` into the envelope.
    pub fn clamp(&self, minutes: u32) -> u32 {
        minutes.clamp(self.start, self.end.max(self.start))
    }
}
