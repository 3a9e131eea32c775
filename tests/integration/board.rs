use crate::common::{plain, read_log_contents, run_with_input, session_dir};

#[test]
fn board_shows_first_court_window_for_requested_day() {
    let dir = session_dir("board");
    let output = run_with_input(&dir, "day monday\nexit\n");
    assert!(output.status.success(), "session should complete");

    let stdout = plain(&output.stdout);
    assert!(stdout.contains("C O U R T B O A R D"));
    assert!(stdout.contains("CENTRO / MONDAY / 09:00-22:00"));
    assert!(stdout.contains("Pista 1"));
    assert!(stdout.contains("Lucia"));
    assert!(stdout.contains("< courts 1-4 of 6 >"));
}

#[test]
fn panning_reveals_later_courts_and_stops_at_the_end() {
    let dir = session_dir("board");
    let output = run_with_input(&dir, "day mon\n>\n>\n>\nexit\n");
    assert!(output.status.success());

    let stdout = plain(&output.stdout);
    let last_frame = stdout
        .rsplit("CENTRO / MONDAY")
        .next()
        .expect("at least one monday frame");
    assert!(last_frame.contains("Pista 6"));
    assert!(last_frame.contains("Booked"));
    assert!(last_frame.contains("courts 3-6 of 6"));
    assert!(!last_frame.contains("Pista 1 "));
}

#[test]
fn terminal_width_fallback_sizes_court_columns() {
    let dir = session_dir("board");
    let output = run_with_input(&dir, "day monday\nexit\n");
    let stdout = plain(&output.stdout);

    // 80 columns, 5 for time, 4 courts: 18 per court including the gap.
    let header = stdout
        .lines()
        .find(|l| l.starts_with("TIME "))
        .expect("header line");
    assert_eq!(header.chars().count(), 5 + 4 * 18);
}

#[test]
fn hours_command_prints_weekly_table_and_envelope() {
    let dir = session_dir("board");
    let output = run_with_input(&dir, "hours\nexit\n");
    assert!(output.status.success());

    let stdout = plain(&output.stdout);
    assert!(stdout.contains("OPENING HOURS"));
    assert!(stdout.contains("tuesday"));
    assert!(stdout.contains("17:00-22:00"));
    assert!(stdout.contains("Business hours: 09:00-22:00"));
}

#[test]
fn unknown_command_is_reported_and_session_continues() {
    let dir = session_dir("board");
    let output = run_with_input(&dir, "book 3\nday funday\nexit\n");
    assert!(output.status.success(), "bad input must not end the session");

    let stderr = plain(&output.stderr);
    assert!(stderr.contains("Unknown command 'book'."));
    assert!(stderr.contains("Invalid day of the week: 'funday'"));
}

#[test]
fn session_log_records_branch_load() {
    let dir = session_dir("board");
    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Loaded branch 'Centro' with 6 court(s) and 2 booking(s)."));
}
