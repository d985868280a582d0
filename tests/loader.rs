//! Loading timer files from disk

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use timetracker::{
    loader::{load_registry, LoadError, ParseError, Units},
    state::{RegistryError, TimerState, MAX_TIMERS},
};

fn timer_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn loads_work_and_break() {
    let file = timer_file("Work=25M\nBreak=5M\n");
    let registry = load_registry(file.path(), Units::Minutes).unwrap();

    assert_eq!(registry.len(), 2);
    let states: Vec<_> = registry.iter().map(|t| (t.name(), t.state())).collect();
    assert_eq!(
        states,
        [
            ("Work", TimerState::Stopped { remaining_seconds: 1500 }),
            ("Break", TimerState::Stopped { remaining_seconds: 300 }),
        ]
    );
}

#[test]
fn seconds_units_keep_raw_counts() {
    let file = timer_file("Egg=180M\nTea=240\n");
    let registry = load_registry(file.path(), Units::Seconds).unwrap();
    let budgets: Vec<_> = registry.iter().map(|t| t.remaining(0)).collect();
    assert_eq!(budgets, [180, 240]);
}

#[test]
fn missing_file_fails_to_open() {
    let err = load_registry(Path::new("/nonexistent/timers.conf"), Units::Minutes).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
    assert_eq!(err.to_string(), "failed to open /nonexistent/timers.conf");
}

#[test]
fn malformed_line_reports_its_number() {
    let file = timer_file("# plan\nWork=25M\nBreak five minutes\n");
    let err = load_registry(file.path(), Units::Minutes).unwrap_err();

    match &err {
        LoadError::Parse { line, content, source, .. } => {
            assert_eq!(*line, 3);
            assert_eq!(content, "Break five minutes");
            assert_eq!(*source, ParseError::MissingSeparator);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("failed to parse line 3 of "));
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Work=25M\n\xff\xfe=1M\n").unwrap();
    let err = load_registry(file.path(), Units::Minutes).unwrap_err();
    assert!(matches!(err, LoadError::Read { line: 2, .. }));
}

#[test]
fn empty_file_has_no_timetrackers() {
    let file = timer_file("");
    let err = load_registry(file.path(), Units::Minutes).unwrap_err();
    assert!(matches!(err, LoadError::Invalid { source: RegistryError::Empty, .. }));

    let chain = format!("{:#}", anyhow::Error::from(err));
    assert!(chain.ends_with("no timetrackers found"), "{chain}");
}

#[test]
fn capacity_is_enforced() {
    let full: String = (1..=MAX_TIMERS).map(|i| format!("Timer {i}=1M\n")).collect();
    let file = timer_file(&full);
    assert_eq!(load_registry(file.path(), Units::Minutes).unwrap().len(), MAX_TIMERS);

    let over = format!("{full}One too many=1M\n");
    let file = timer_file(&over);
    let err = load_registry(file.path(), Units::Minutes).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Invalid {
            source: RegistryError::TooMany { max: MAX_TIMERS, .. },
            ..
        }
    ));
}
