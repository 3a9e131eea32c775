use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error set for the outer surfaces (config, branch file, CLI, prompt input).
/// The time and viewport utilities never produce one of these.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing ------------------------------------------------------------
    /// Bad user input: prompt commands, weekday names, config values.
    #[error("Parse error: {0}")]
    Parse(String),

    // ---- Branch / Domain ----------------------------------------------------
    /// The branch description could not be read or is inconsistent.
    #[error("Branch error: {0}")]
    Branch(String),

    /// A booking references a court that the branch does not list.
    #[error("Booking '{booking}' references unknown court {court_id}.")]
    UnknownCourt { booking: String, court_id: u32 },

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (file missing, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// Prompt input that names no known command.
    #[error("{0}")]
    Domain(String),

    /// IO passthrough (read/write files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn branch<S: Into<String>>(msg: S) -> Self {
        Error::Branch(msg.into())
    }
}
