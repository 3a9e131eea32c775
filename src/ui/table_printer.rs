use crate::ui::width_util::WidthUtil;
use std::io::Write;

const COLUMN_GAP: &str = " | ";

/// How column widths are chosen.
#[derive(Debug, Clone, Copy)]
pub enum ColumnWidths<'a> {
    /// Widest cell per column; the rule lines stretch to at least `min_total`.
    Natural { min_total: usize },
    /// Every cell is padded or cut to the given width.
    Fixed(&'a [usize]),
}

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    left_pad: usize,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a clone that indents every printed line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        Self {
            left_pad: pad,
            ..self.clone()
        }
    }

    fn write_indented<W: Write + ?Sized>(&self, out: &mut W, s: &str) -> std::io::Result<()> {
        writeln!(out, "{}{s}", " ".repeat(self.left_pad))
    }

    fn write_rule<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> std::io::Result<()> {
        self.write_indented(out, &"-".repeat(width.max(1)))
    }

    fn write_banner<W: Write + ?Sized>(
        &self,
        out: &mut W,
        title: &str,
        width: usize,
    ) -> std::io::Result<()> {
        let width = width.max(self.util.visible_width(title));
        self.write_rule(out, width)?;
        self.write_indented(out, &title.to_uppercase())?;
        self.write_rule(out, width)
    }

    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> std::io::Result<()> {
        self.write_banner(out, title, width)
    }

    pub fn natural_width<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> usize {
        Self::total_width(&self.natural_col_widths(headers, rows))
    }

    /// Banner, header, rows and closing rule. With no rows and an
    /// `empty_message`, the message replaces header and rows.
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        widths: ColumnWidths<'_>,
        empty_message: Option<&str>,
        out: &mut W,
    ) -> std::io::Result<()> {
        let (col_widths, fixed) = match widths {
            ColumnWidths::Natural { .. } => (self.natural_col_widths(headers, rows), false),
            ColumnWidths::Fixed(w) => (w.to_vec(), true),
        };
        let min_total = match widths {
            ColumnWidths::Natural { min_total } => min_total,
            ColumnWidths::Fixed(_) => 0,
        };
        let total = Self::total_width(&col_widths).max(min_total);

        if let (true, Some(msg)) = (rows.is_empty(), empty_message) {
            let width = total.max(self.util.visible_width(msg));
            self.write_banner(out, title, width)?;
            self.write_indented(out, msg)?;
            return self.write_rule(out, width);
        }

        self.write_banner(out, title, total)?;
        let header_cells: Vec<&str> = headers.to_vec();
        self.write_indented(out, &self.join_cells(&header_cells, &col_widths, fixed))?;
        self.write_rule(out, total)?;
        for row in rows {
            self.write_indented(out, &self.join_cells(row, &col_widths, fixed))?;
        }
        self.write_rule(out, total)
    }

    fn natural_col_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut col_widths: Vec<usize> =
            headers.iter().map(|h| self.util.visible_width(h)).collect();
        for row in rows {
            for (w, cell) in col_widths.iter_mut().zip(row) {
                *w = (*w).max(self.util.visible_width(cell.as_ref()));
            }
        }
        col_widths
    }

    fn total_width(col_widths: &[usize]) -> usize {
        match col_widths.len() {
            0 => 0,
            n => col_widths.iter().sum::<usize>() + (n - 1) * COLUMN_GAP.len(),
        }
    }

    fn join_cells<T: AsRef<str>>(&self, cells: &[T], col_widths: &[usize], fixed: bool) -> String {
        cells
            .iter()
            .zip(col_widths)
            .map(|(cell, &w)| {
                if fixed {
                    self.util.fit(cell.as_ref(), w)
                } else {
                    self.util.pad_visible(cell.as_ref(), w)
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
    }
}
