pub mod ansi;
pub mod ascii;
pub mod board;
pub mod chrome;
pub mod display_manager;
pub mod table_printer;
#[cfg(test)]
mod tests;
pub mod width_util;
