use std::io::Write;
use std::rc::Rc;

use crate::core::context::AppContext;
use crate::core::types::{DayOfWeek, Direction};
use crate::errors::{Error, Result};
use crate::extensions::chrono::today;
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::board::BookingBoard;
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;
use crate::viewport::TableViewport;
use crate::viewport::resize::{ResizeSource, TerminalResizeSource};

const HELP_LINE: &str =
    "Commands: < | > | day <weekday> | hours | config | set <KEY> <VALUE> | exit";

/// The booking board screen: redraws the visible court window on every
/// prompt and pans it one court at a time.
pub struct BoardFlow<'a> {
    ctx: &'a mut AppContext,
    source: Rc<dyn ResizeSource>,
    viewport: TableViewport,
    day: DayOfWeek,
    board: BookingBoard,
    display: DisplayManager,
    chrome: UiChrome,
    logger: Logger,
}

impl<'a> BoardFlow<'a> {
    /// Board for today, sized to the terminal.
    pub fn new(ctx: &'a mut AppContext) -> Self {
        Self::with_source(ctx, Rc::new(TerminalResizeSource::new()), today())
    }

    pub fn with_source(
        ctx: &'a mut AppContext,
        source: Rc<dyn ResizeSource>,
        day: DayOfWeek,
    ) -> Self {
        let logger = ctx.logger.clone();
        let mut viewport =
            TableViewport::with_layout(ctx.branch.courts.len(), ctx.config.layout());
        viewport.mount(Rc::clone(&source));
        Self {
            ctx,
            source,
            viewport,
            day,
            board: BookingBoard::new(),
            display: DisplayManager::new(),
            chrome: UiChrome::new(),
            logger,
        }
    }

    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    pub fn viewport(&self) -> &TableViewport {
        &self.viewport
    }
}

impl Flow for BoardFlow<'_> {
    fn render(&mut self, out: &mut dyn Write) -> Result<()> {
        self.write_startup(out)?;
        self.source.poll();
        self.board.render(
            &self.ctx.branch,
            self.day,
            &self.viewport,
            self.ctx.config.slot_minutes(),
            out,
        )?;
        writeln!(out, "{HELP_LINE}")?;
        self.chrome.write_prompt(out, "> ")?;
        Ok(())
    }

    fn handle_input(&mut self, input: &str, out: &mut dyn Write) -> Result<FlowCtrl> {
        let line = input.trim();
        if line.is_empty() {
            return Ok(FlowCtrl::Continue);
        }
        if line.eq_ignore_ascii_case("exit") {
            self.viewport.unmount();
            return Ok(FlowCtrl::Finish);
        }

        if let Err(err) = self.dispatch(line, out) {
            self.logger.error(
                format!("Command '{line}' failed. {err}"),
                LogTarget::ConsoleAndFile,
            );
        }
        Ok(FlowCtrl::Continue)
    }
}

impl BoardFlow<'_> {
    fn write_startup(&mut self, out: &mut dyn Write) -> Result<()> {
        if self.ctx.startup_displayed {
            return Ok(());
        }
        self.chrome.write_banner(out)?;
        writeln!(out)?;
        writeln!(out, "Config path: {}", self.ctx.config_path.display())?;
        writeln!(out, "Branch path: {}", self.ctx.branch_path.display())?;
        writeln!(out, "Logs path: {}", self.ctx.logs_dir.display())?;
        writeln!(out)?;
        self.ctx.startup_displayed = true;
        Ok(())
    }

    fn dispatch(&mut self, line: &str, out: &mut dyn Write) -> Result<()> {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        if let (Ok(direction), true) = (Direction::try_from(command), args.is_empty()) {
            let start = self.viewport.navigate(direction);
            self.logger.info(
                format!("Panned {direction}; first visible court is #{}.", start + 1),
                LogTarget::FileOnly,
            );
            return Ok(());
        }

        match (command.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("day", [name]) => {
                self.day = DayOfWeek::try_from(name)?;
                Ok(())
            }
            ("day", _) => Err(Error::parse("Usage: day <weekday>")),
            ("hours", []) => {
                self.display
                    .write_hours(&self.ctx.branch, self.ctx.config.slot_minutes(), out)?;
                Ok(())
            }
            ("config", []) => {
                self.display.write_config(&self.ctx.config, out)?;
                Ok(())
            }
            ("set", [key, value @ ..]) if !value.is_empty() => {
                self.set_config(key, &value.join(" "))
            }
            ("set", _) => Err(Error::parse("Usage: set <KEY> <VALUE>")),
            _ => Err(Error::Domain(format!("Unknown command '{command}'."))),
        }
    }

    fn set_config(&mut self, key: &str, value: &str) -> Result<()> {
        self.ctx.config.set(key, value)?;
        self.viewport.set_layout(self.ctx.config.layout());
        self.logger
            .set_file_logging_enabled(self.ctx.config.file_logging_enabled());
        if let Some((key, old, new)) = self.ctx.config.take_last_change() {
            self.logger.info(
                format!("Config {key} changed from {old} to {new}."),
                LogTarget::ConsoleAndFile,
            );
        }
        Ok(())
    }
}

impl Drop for BoardFlow<'_> {
    fn drop(&mut self) {
        self.viewport.unmount();
    }
}
