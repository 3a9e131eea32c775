//! Opening-hours reasoning over a branch's week schedule: the widest
//! business-hours envelope and the slot grid that time pickers and the
//! booking board lay out inside it.

pub mod business_hours;
pub mod time_slots;
#[cfg(test)]
mod tests;

pub use business_hours::{
    DEFAULT_CLOSING, DEFAULT_OPENING, business_hours, business_hours_with, envelope_of,
};
pub use time_slots::SlotGrid;
