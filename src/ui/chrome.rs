use crate::ui::ansi::{
    CLEAR_SCREEN, CURSOR_HOME, FG_LIGHT_GRAY, STYLE_BOLD, STYLE_ITALIC, STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

/// Screen-level helpers: banner, clearing, prompt line.
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    const BANNER_WIDTH: usize = 44;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_banner<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}C O U R T B O A R D{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Court bookings at a glance{STYLE_RESET}");
        let inner = Self::BANNER_WIDTH;
        writeln!(out, "╭{}╮", "─".repeat(inner))?;
        writeln!(out, "│{}│", self.center_in_box(&title, inner))?;
        writeln!(out, "│{}│", self.center_in_box(&subtitle, inner))?;
        writeln!(out, "╰{}╯", "─".repeat(inner))
    }

    pub fn clear_screen<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{CLEAR_SCREEN}{CURSOR_HOME}")?;
        out.flush()
    }

    pub fn write_prompt<W: Write + ?Sized>(&self, out: &mut W, prompt: &str) -> io::Result<()> {
        write!(out, "{prompt}")?;
        out.flush()
    }

    pub fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = self.util.center_pad(width, content_width);
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
