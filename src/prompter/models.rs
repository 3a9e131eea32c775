use crate::errors::Result;
use std::io::Write;

pub enum FlowCtrl {
    Continue,
    Finish,
}

/// One interactive screen driven line by line by the [`Prompter`].
///
/// [`Prompter`]: crate::prompter::prompter::Prompter
pub trait Flow {
    fn render(&mut self, out: &mut dyn Write) -> Result<()>;
    fn handle_input(&mut self, input: &str, out: &mut dyn Write) -> Result<FlowCtrl>;
}
