use std::fs;

use courtboard::config::Config;

use crate::common::{
    make_temp_dir, plain, run_with_args, run_with_input, session_dir, write_branch,
    write_default_config,
};

#[test]
fn set_command_persists_and_reports_change() {
    let dir = session_dir("config");
    let output = run_with_input(&dir, "set slot_minutes 60\nexit\n");
    assert!(output.status.success());

    let stdout = plain(&output.stdout);
    assert!(stdout.contains("Config SLOT_MINUTES changed from 30 to 60."));

    let cfg = Config::load_from(dir.join("config.json")).expect("config should reload");
    assert_eq!(cfg.slot_minutes(), 60);
}

#[test]
fn config_command_lists_keys() {
    let dir = session_dir("config");
    let output = run_with_input(&dir, "config\nexit\n");
    let stdout = plain(&output.stdout);
    assert!(stdout.contains("CONFIG"));
    assert!(stdout.contains("MIN_COLUMN_WIDTH"));
}

#[test]
fn missing_config_exits_with_error() {
    let dir = make_temp_dir("config");
    write_branch(&dir);
    let output = run_with_input(&dir, "");

    assert_eq!(output.status.code(), Some(1));
    assert!(plain(&output.stderr).contains("Configuration file 'config.json' not found."));
}

#[test]
fn missing_branch_exits_with_error() {
    let dir = make_temp_dir("config");
    write_default_config(&dir);
    let output = run_with_input(&dir, "");

    assert_eq!(output.status.code(), Some(1));
    assert!(plain(&output.stderr).contains("Branch file 'branch.json' not found."));
}

#[test]
fn unknown_flag_exits_with_error() {
    let dir = session_dir("config");
    let output = run_with_args(&dir, &["--bogus"], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(plain(&output.stderr).contains("Unknown argument: --bogus"));
}

#[test]
fn flags_point_at_other_files() {
    let dir = make_temp_dir("config");
    let nested = dir.join("data");
    fs::create_dir_all(&nested).unwrap();
    write_default_config(&nested);
    write_branch(&nested);

    let output = run_with_args(
        &dir,
        &[
            "--config",
            "data/config.json",
            "--branch",
            "data/branch.json",
            "--logs",
            "data/logs",
        ],
        "exit\n",
    );
    assert!(output.status.success());
    let stdout = plain(&output.stdout);
    assert!(stdout.contains("Branch path: data/branch.json"));
    assert!(nested.join("logs").is_dir());
}
