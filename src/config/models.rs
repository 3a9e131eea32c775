use crate::core::types::Bool;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<()>;
    fn description(&self) -> &str;
}

fn parse_u32(new_value: &str) -> Result<u32> {
    new_value.trim().parse::<u32>().map_err(|_| {
        Error::Parse(format!(
            "Invalid number: '{}'. Expected a non-negative integer.",
            new_value.trim()
        ))
    })
}

/// A count that must be at least one (visible columns, slot length).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountConfigItem {
    pub value: u32,
    pub description: String,
}

impl CountConfigItem {
    pub fn new(value: u32, description: &str) -> Self {
        Self {
            value,
            description: description.into(),
        }
    }
}

impl ConfigItem<u32> for CountConfigItem {
    fn get_value(&self) -> &u32 {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<()> {
        let parsed = parse_u32(new_value)?;
        if parsed == 0 {
            return Err(Error::Parse("Value must be at least 1.".to_string()));
        }
        self.value = parsed;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// A width in layout units (character cells on the terminal board).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidthConfigItem {
    pub value: u32,
    pub description: String,
}

impl WidthConfigItem {
    pub fn new(value: u32, description: &str) -> Self {
        Self {
            value,
            description: description.into(),
        }
    }
}

impl ConfigItem<u32> for WidthConfigItem {
    fn get_value(&self) -> &u32 {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<()> {
        self.value = parse_u32(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<()> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

// Terminal board defaults: one layout unit is one character cell.
pub(super) fn default_max_visible_columns() -> CountConfigItem {
    CountConfigItem::new(4, "Most court columns shown at once.")
}

pub(super) fn default_time_column_width() -> WidthConfigItem {
    WidthConfigItem::new(5, "Width reserved for the time column.")
}

pub(super) fn default_min_column_width() -> WidthConfigItem {
    WidthConfigItem::new(12, "Narrowest a court column may get.")
}

pub(super) fn default_slot_minutes() -> CountConfigItem {
    CountConfigItem::new(30, "Minutes per board row.")
}
