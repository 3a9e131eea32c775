use crate::config::Config;
use crate::core::cli::CliPaths;
use crate::core::models::Branch;
use crate::errors::Result;
use crate::logging::{self, LogTarget, Logger};
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub branch: Branch,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub branch_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn from_paths(paths: CliPaths) -> Result<Self> {
        Self::new_with_paths(paths.config_path, paths.branch_path, paths.logs_dir)
    }

    pub fn new_with_paths(
        config_path: PathBuf,
        branch_path: PathBuf,
        logs_dir: PathBuf,
    ) -> Result<Self> {
        let config = Config::load_from(&config_path)?;

        // The time utilities report through the global logger, so it shares
        // the session settings of the context logger.
        let logger = logging::global().clone();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        let branch = Branch::load_from(&branch_path)?;
        logger.info(
            format!(
                "Loaded branch '{}' with {} court(s) and {} booking(s).",
                branch.name,
                branch.courts.len(),
                branch.bookings.len()
            ),
            LogTarget::FileOnly,
        );

        Ok(Self {
            config,
            branch,
            logger,
            startup_displayed: false,
            config_path,
            branch_path,
            logs_dir,
        })
    }
}
