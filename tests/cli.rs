use std::path::Path;
use std::process::{Command, Output};

/// Run the binary with an empty config directory so a user's own
/// ~/.config/mkical/config.toml never leaks into the test.
fn mkical(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mkical"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run mkical")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_generates_countdown() {
    let home = tempfile::tempdir().unwrap();
    let output = mkical(
        home.path(),
        &["--start", "2024-11", "--dom", "15", "--months", "3"],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let ics = stdout(&output);
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
    assert!(ics.contains("DTSTART;VALUE=DATE:20241115"));
    assert!(ics.contains("DTSTART;VALUE=DATE:20241215"));
    assert!(ics.contains("DTSTART;VALUE=DATE:20250115"));
    assert!(ics.contains("SUMMARY:3 months remaining on mortgage"));
    assert!(ics.contains("X-WR-CALNAME:Mortgage Countdown"));
    assert!(ics.contains("LOCATION:Home"));
}

#[test]
fn test_default_run_has_42_events() {
    let home = tempfile::tempdir().unwrap();
    let output = mkical(home.path(), &[]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).matches("BEGIN:VEVENT").count(), 42);
}

#[test]
fn test_invalid_dom_exits_1() {
    let home = tempfile::tempdir().unwrap();
    for dom in ["29", "-1"] {
        let output = mkical(home.path(), &["--dom", dom]);
        assert_eq!(output.status.code(), Some(1), "dom {dom}");
        assert!(output.stdout.is_empty());
        assert!(stderr(&output).contains("invalid dom: dom must be between 0 and 28"));
    }
}

#[test]
fn test_invalid_months_exits_2() {
    let home = tempfile::tempdir().unwrap();
    for months in ["501", "-1"] {
        let output = mkical(home.path(), &["--months", months]);
        assert_eq!(output.status.code(), Some(2), "months {months}");
        assert!(output.stdout.is_empty());
        assert!(stderr(&output).contains("invalid months: months must be between 0 and 500"));
    }
}

#[test]
fn test_zero_months_is_eventless_calendar() {
    let home = tempfile::tempdir().unwrap();
    let output = mkical(home.path(), &["--months", "0"]);

    assert_eq!(output.status.code(), Some(0));
    let ics = stdout(&output);
    assert!(ics.contains("BEGIN:VCALENDAR"));
    assert!(ics.contains("END:VCALENDAR"));
    assert!(!ics.contains("BEGIN:VEVENT"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join("conf");
    std::fs::create_dir_all(&config_dir).unwrap();
    let config = config_dir.join("mkical.toml");
    std::fs::write(
        &config,
        "name = \"Car Loan\"\nmonths = 2\ndom = 3\nlocation = \"Bank\"\nsummary = \"{remaining} payments left\"\n",
    )
    .unwrap();

    let output = mkical(
        home.path(),
        &["--config", config.to_str().unwrap(), "--start", "2025-01"],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let ics = stdout(&output);
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
    assert!(ics.contains("X-WR-CALNAME:Car Loan"));
    assert!(ics.contains("LOCATION:Bank"));
    assert!(ics.contains("SUMMARY:2 payments left"));
    assert!(ics.contains("DTSTART;VALUE=DATE:20250203"));
}

#[test]
fn test_config_file_values_are_range_checked() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("mkical.toml");
    std::fs::write(&config, "months = 900\n").unwrap();

    let output = mkical(home.path(), &["--config", config.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_config_file_exits_3() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("missing.toml");

    let output = mkical(home.path(), &["--config", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_bad_start_month_exits_3() {
    let home = tempfile::tempdir().unwrap();
    let output = mkical(home.path(), &["--start", "2024-13"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("2024-13"));
}

#[test]
fn test_bad_dom_wins_over_bad_start_month() {
    let home = tempfile::tempdir().unwrap();
    let output = mkical(home.path(), &["--start", "2024-13", "--dom", "29"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_alarm_flag() {
    let home = tempfile::tempdir().unwrap();
    let output = mkical(home.path(), &["--months", "2", "--alarm", "30"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).matches("BEGIN:VALARM").count(), 2);
}
