use crate::errors::Result;
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::{CURSOR_HOME, ENTER_ALT_SCREEN, EXIT_ALT_SCREEN, HIDE_CURSOR, SHOW_CURSOR};
use std::io::{self, BufRead, Write};

#[derive(Debug, Default, Clone)]
pub struct Prompter;

impl Prompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run<F: Flow>(&self, flow: F, use_alt_screen: bool) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.run_with_io(flow, stdin.lock(), &mut stdout, use_alt_screen)
    }

    /// Render, read a line, dispatch, until the flow finishes or input ends.
    /// The alternate screen is left again even when the flow fails.
    pub fn run_with_io<F: Flow, R: BufRead, W: Write>(
        &self,
        mut flow: F,
        mut reader: R,
        out: &mut W,
        use_alt_screen: bool,
    ) -> Result<()> {
        if use_alt_screen {
            write!(out, "{ENTER_ALT_SCREEN}{CURSOR_HOME}")?;
            out.flush()?;
        }

        let result = Self::drive(&mut flow, &mut reader, out);

        if use_alt_screen {
            write!(out, "{SHOW_CURSOR}{EXIT_ALT_SCREEN}")?;
            out.flush()?;
        }
        result
    }

    fn drive<F: Flow, R: BufRead, W: Write>(flow: &mut F, reader: &mut R, out: &mut W) -> Result<()> {
        loop {
            write!(out, "{HIDE_CURSOR}")?;
            flow.render(out)?;
            write!(out, "{SHOW_CURSOR}")?;
            out.flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let line = line.trim();

            // Global escape hatch, whatever the flow does with input.
            if line.eq_ignore_ascii_case("exit") {
                return Ok(());
            }

            match flow.handle_input(line, out)? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish => return Ok(()),
            }
        }
    }
}
