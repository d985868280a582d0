//! Exit status and error reporting of the binary for failures before the dashboard starts

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn timetracker(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_timetracker"))
        .args(args)
        .env("RUST_BACKTRACE", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("run timetracker")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_file_reports_one_error_line() {
    let output = timetracker(&["-f", "/nonexistent/timers.conf"]);
    let stderr = stderr(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.starts_with("error: error initializing timetrackers: failed to open /nonexistent/timers.conf: "),
        "{stderr}"
    );
    assert!(!stderr.contains("Caused by"), "{stderr}");
    assert!(!stderr.contains("stack backtrace"), "{stderr}");
}

#[test]
fn malformed_line_names_the_line() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Bad\n").unwrap();
    let path = file.path().to_str().unwrap();

    let output = timetracker(&["-f", path]);
    let stderr = stderr(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("failed to parse line 1 of"), "{stderr}");
    assert!(stderr.trim_end().ends_with("expected NAME=COUNT, found no '='"), "{stderr}");
}

#[test]
fn usage_errors_and_help_exit_with_one() {
    assert_eq!(timetracker(&[]).status.code(), Some(1));
    assert_eq!(timetracker(&["-x", "-f", "a"]).status.code(), Some(1));
    assert_eq!(timetracker(&["-h"]).status.code(), Some(1));
    assert_eq!(timetracker(&["-V"]).status.code(), Some(0));
}
