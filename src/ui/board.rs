use crate::core::models::Branch;
use crate::core::time::minutes_to_time;
use crate::core::types::{DayOfWeek, Direction};
use crate::schedule::SlotGrid;
use crate::ui::ansi::{STYLE_DIM, STYLE_RESET};
use crate::ui::table_printer::{ColumnWidths, TablePrinter};
use crate::viewport::TableViewport;
use std::io::{self, Write};

/// Cell text for a slot outside the day's opening hours.
pub const CLOSED_CELL: &str = "--";

/// One rendered frame of the booking board: time slots down, the visible
/// court window across.
#[derive(Debug, Clone)]
pub struct BoardFrame {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Per-column widths, time column first. `None` until the container has
    /// been measured; the printer then sizes columns to their content.
    pub widths: Option<Vec<usize>>,
    pub empty_message: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct BookingBoard {
    printer: TablePrinter,
}

impl BookingBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(
        &self,
        branch: &Branch,
        day: DayOfWeek,
        viewport: &TableViewport,
        slot_minutes: u32,
    ) -> BoardFrame {
        let envelope = branch.envelope();
        let grid = SlotGrid::new(&envelope, slot_minutes);
        let courts = branch
            .courts
            .get(viewport.visible_range())
            .unwrap_or_default();

        let mut headers = vec!["TIME".to_string()];
        headers.extend(courts.iter().map(|c| c.name.clone()));

        let rows = if courts.is_empty() {
            Vec::new()
        } else {
            grid.starts()
                .into_iter()
                .map(|slot| {
                    let mut row = vec![minutes_to_time(slot)];
                    row.extend(courts.iter().map(|court| {
                        match branch.booking_at(court.id, day, slot, grid.step()) {
                            Some(booking) => booking.label().to_string(),
                            None if !branch.is_open(day, slot) => CLOSED_CELL.to_string(),
                            None => String::new(),
                        }
                    }));
                    row
                })
                .collect()
        };

        // Each court column's allotment includes the " | " gap before it.
        let widths = match viewport.column_width() {
            0 => None,
            col => {
                let layout = viewport.layout();
                let mut w = vec![layout.time_column_width as usize];
                w.extend(courts.iter().map(|_| (col as usize).saturating_sub(3).max(1)));
                Some(w)
            }
        };

        BoardFrame {
            title: format!("{} / {} / {}", branch.name, day, envelope),
            headers,
            rows,
            widths,
            empty_message: if courts.is_empty() {
                "No courts configured."
            } else {
                "No open hours."
            },
        }
    }

    pub fn render<W: Write + ?Sized>(
        &self,
        branch: &Branch,
        day: DayOfWeek,
        viewport: &TableViewport,
        slot_minutes: u32,
        out: &mut W,
    ) -> io::Result<()> {
        let frame = self.frame(branch, day, viewport, slot_minutes);
        let headers: Vec<&str> = frame.headers.iter().map(String::as_str).collect();
        let widths = match &frame.widths {
            Some(w) => ColumnWidths::Fixed(w),
            None => ColumnWidths::Natural { min_total: 0 },
        };
        self.printer.render_table(
            &frame.title,
            &headers,
            &frame.rows,
            widths,
            Some(frame.empty_message),
            out,
        )?;
        writeln!(out, "{}", Self::nav_line(viewport))
    }

    /// `< courts 2-5 of 6 >`, arrows dimmed when that pan is unavailable.
    pub fn nav_line(viewport: &TableViewport) -> String {
        let range = viewport.visible_range();
        let arrow = |dir: Direction, glyph: &str| {
            if viewport.can_navigate(dir) {
                glyph.to_string()
            } else {
                format!("{STYLE_DIM}{glyph}{STYLE_RESET}")
            }
        };
        let window = if range.is_empty() {
            "no courts".to_string()
        } else {
            format!(
                "courts {}-{} of {}",
                range.start + 1,
                range.end,
                viewport.total_columns()
            )
        };
        format!(
            "{} {window} {}",
            arrow(Direction::Left, "<"),
            arrow(Direction::Right, ">")
        )
    }
}
