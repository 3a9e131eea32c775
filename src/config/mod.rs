pub mod models;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, CountConfigItem, FileLoggingConfigItem, WidthConfigItem,
    default_max_visible_columns, default_min_column_width, default_slot_minutes,
    default_time_column_width,
};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::viewport::ViewportLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    MaxVisibleColumns,
    TimeColumnWidth,
    MinColumnWidth,
    SlotMinutes,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_max_visible_columns")]
    pub max_visible_columns: CountConfigItem,
    #[serde(default = "default_time_column_width")]
    pub time_column_width: WidthConfigItem,
    #[serde(default = "default_min_column_width")]
    pub min_column_width: WidthConfigItem,
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: CountConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

/// Key, description and current value of one config entry.
pub type ConfigRow = (String, String, String);

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    last_change: Option<ConfigRow>,
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Self::validate(&path, &data)?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    /// Counts must be at least one, as `set` enforces on edits.
    fn validate(path: &Path, data: &ConfigFile) -> Result<()> {
        let counts = [
            (ConfigKey::MaxVisibleColumns, &data.max_visible_columns),
            (ConfigKey::SlotMinutes, &data.slot_minutes),
        ];
        match counts.iter().find(|(_, item)| *item.get_value() == 0) {
            Some((key, _)) => Err(Error::config(format!(
                "Invalid value for {key} in '{}': must be at least 1.",
                path.display()
            ))),
            None => Ok(()),
        }
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn layout(&self) -> ViewportLayout {
        ViewportLayout {
            max_visible_columns: *self.data.max_visible_columns.get_value() as usize,
            time_column_width: *self.data.time_column_width.get_value(),
            min_column_width: *self.data.min_column_width.get_value(),
        }
    }

    pub fn slot_minutes(&self) -> u32 {
        *self.data.slot_minutes.get_value()
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    fn row_for(&self, key: ConfigKey) -> ConfigRow {
        let (description, value) = match key {
            ConfigKey::MaxVisibleColumns => Self::describe(&self.data.max_visible_columns),
            ConfigKey::TimeColumnWidth => Self::describe(&self.data.time_column_width),
            ConfigKey::MinColumnWidth => Self::describe(&self.data.min_column_width),
            ConfigKey::SlotMinutes => Self::describe(&self.data.slot_minutes),
            ConfigKey::FileLoggingEnabled => Self::describe(&self.data.file_logging_enabled),
        };
        (key.to_string(), description, value)
    }

    fn describe<T: ToString>(item: &impl ConfigItem<T>) -> (String, String) {
        (item.description().to_string(), item.get_value().to_string())
    }

    pub fn rows(&self) -> Vec<ConfigRow> {
        ConfigKey::iter().map(|key| self.row_for(key)).collect()
    }

    /// Validates and stores `new_value`, then writes the file back.
    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let (_, _, old) = self.row_for(key);
        self.edit(|cfg| match key {
            ConfigKey::MaxVisibleColumns => cfg.max_visible_columns.set_value(new_value),
            ConfigKey::TimeColumnWidth => cfg.time_column_width.set_value(new_value),
            ConfigKey::MinColumnWidth => cfg.min_column_width.set_value(new_value),
            ConfigKey::SlotMinutes => cfg.slot_minutes.set_value(new_value),
            ConfigKey::FileLoggingEnabled => cfg.file_logging_enabled.set_value(new_value),
        })?;
        let (_, _, new) = self.row_for(key);
        self.last_change = Some((key.to_string(), old, new));
        Ok(())
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str.trim(),
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    /// Key, old value, new value of the last successful change.
    pub fn take_last_change(&mut self) -> Option<ConfigRow> {
        self.last_change.take()
    }

    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        let mut draft = self.data.clone();
        f(&mut draft)?;
        self.data = draft;
        self.save()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
