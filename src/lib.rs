pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod logging;
pub mod prompter;
pub mod schedule;
pub mod ui;
pub mod viewport;
