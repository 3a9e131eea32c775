use crate::logging::{LogLevel, LogTarget, Logger, global};
use std::fs;

fn temp_log_dir(tag: &str) -> std::path::PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("courtboard-logs-{tag}-{nanos}"))
}

#[test]
fn logger_defers_file_creation_until_needed() {
    let logger = Logger::new();
    logger.set_log_dir(temp_log_dir("defer"));
    assert!(logger.log_path().is_none());

    logger.info("console only", LogTarget::ConsoleOnly);
    assert!(logger.log_path().is_none());

    logger.info("file line", LogTarget::FileOnly);
    let path = logger.log_path().expect("log path should be set");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("file line"));
    assert!(contents.contains("INFO"));
}

#[test]
fn logger_writes_levels_and_combined_targets() {
    let logger = Logger::new();
    logger.set_log_dir(temp_log_dir("levels"));

    logger.warn("warn line", LogTarget::FileOnly);
    logger.error("error line", LogTarget::ConsoleAndFile);

    let path = logger.log_path().expect("log path should be set");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("WARN"));
    assert!(contents.contains("warn line"));
    assert!(contents.contains("ERROR"));
    assert!(contents.contains("error line"));
}

#[test]
fn logger_skips_file_logging_when_disabled() {
    let logger = Logger::new();
    logger.set_log_dir(temp_log_dir("disabled"));
    logger.set_file_logging_enabled(false);

    logger.info("file should not exist", LogTarget::ConsoleAndFile);
    assert!(logger.log_path().is_none());

    logger.set_file_logging_enabled(true);
    logger.info("now write", LogTarget::FileOnly);
    assert!(logger.log_path().is_some());
}

#[test]
fn log_dir_is_frozen_after_first_file_write() {
    let logger = Logger::new();
    let first = temp_log_dir("frozen");
    logger.set_log_dir(&first);
    logger.info("open it", LogTarget::FileOnly);

    logger.set_log_dir(temp_log_dir("ignored"));
    assert_eq!(logger.log_dir(), Some(first));
}

#[test]
fn capturing_logger_records_console_lines_by_level() {
    let (logger, capture) = Logger::capturing();
    logger.info("hello", LogTarget::ConsoleOnly);
    logger.warn("careful", LogTarget::ConsoleAndFile);
    logger.warn("file only", LogTarget::FileOnly);

    assert_eq!(capture.count(LogLevel::Info), 1);
    assert_eq!(capture.count(LogLevel::Warn), 1);
    assert_eq!(capture.lines()[1].1, "careful");
    assert!(logger.log_path().is_none());
}

#[test]
fn global_logger_is_one_shared_instance() {
    assert!(std::ptr::eq(global(), global()));
    assert!(global().log_path().is_none());
}
