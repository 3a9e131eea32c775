use crate::config::Config;
use crate::core::models::Branch;
use crate::core::types::DayOfWeek;
use crate::schedule::SlotGrid;
use crate::ui::table_printer::{ColumnWidths, TablePrinter};
use std::io::{self, Write};
use strum::IntoEnumIterator;

/// Secondary tables shown from the board prompt.
#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config_rows(&self, config: &Config) -> Vec<Vec<String>> {
        config
            .rows()
            .into_iter()
            .map(|(k, d, v)| vec![k, d, v])
            .collect()
    }

    pub fn write_config<W: Write + ?Sized>(&self, config: &Config, out: &mut W) -> io::Result<()> {
        let headers = ["KEY", "DESCRIPTION", "VALUE"];
        self.printer.render_table(
            "Config",
            &headers,
            &self.config_rows(config),
            ColumnWidths::Natural { min_total: 0 },
            Some("No config items found."),
            out,
        )
    }

    /// One row per weekday with its open ranges, or `closed`.
    pub fn hours_rows(&self, branch: &Branch) -> Vec<Vec<String>> {
        DayOfWeek::iter()
            .map(|day| {
                let ranges = branch.day_schedule(day);
                let text = if branch.schedule.is_none() {
                    "-".to_string()
                } else if ranges.is_empty() {
                    "closed".to_string()
                } else {
                    ranges
                        .iter()
                        .map(|r| r.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                vec![day.to_string(), text]
            })
            .collect()
    }

    /// Weekly opening hours, the resolved envelope and the start times a
    /// booking picker would offer inside it.
    pub fn write_hours<W: Write + ?Sized>(
        &self,
        branch: &Branch,
        slot_minutes: u32,
        out: &mut W,
    ) -> io::Result<()> {
        let headers = ["DAY", "OPEN"];
        let envelope = branch.envelope();
        let options = SlotGrid::new(&envelope, slot_minutes).picker_options();

        self.printer.render_table(
            "Opening hours",
            &headers,
            &self.hours_rows(branch),
            ColumnWidths::Natural { min_total: 0 },
            None,
            out,
        )?;
        writeln!(out, "Business hours: {envelope}")?;
        match (options.first(), options.last()) {
            (Some(first), Some(last)) => writeln!(
                out,
                "Picker options: {first} .. {last} ({} values, every {slot_minutes} min)",
                options.len()
            ),
            _ => writeln!(out, "Picker options: none"),
        }
    }
}
