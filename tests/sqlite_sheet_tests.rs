use chrono::NaiveDate;
use milklog::core::{AttendanceStore, ClearOutcome, StoreOptions};
use milklog::db::log::load_log;
use milklog::errors::AppError;
use milklog::sheet::{SheetBackend, SqliteSheet};
use std::fs;
use std::time::Duration;

mod common;
use common::setup_test_workbook;

fn header() -> Vec<String> {
    vec!["name".to_string(), "timestamp".to_string()]
}

fn open(path: &str, sheet: &str) -> SqliteSheet {
    SqliteSheet::open(path, sheet, &header()).expect("open sheet")
}

fn new_workbook(name: &str) -> String {
    let path = setup_test_workbook(name);
    fs::File::create(&path).expect("create workbook");
    path
}

#[test]
fn missing_workbook_is_unavailable() {
    let path = setup_test_workbook("sqlite_missing");
    assert!(matches!(
        SqliteSheet::open(&path, "milk", &header()),
        Err(AppError::StoreUnavailable(_))
    ));
}

#[test]
fn open_writes_header_once() {
    let path = new_workbook("sqlite_header");

    let mut sheet = open(&path, "milk");
    assert_eq!(sheet.read_all_rows().unwrap(), vec![header()]);
    drop(sheet);

    let mut sheet = open(&path, "milk");
    assert_eq!(sheet.read_all_rows().unwrap(), vec![header()]);
}

#[test]
fn rows_persist_and_sheets_are_separate() {
    let path = new_workbook("sqlite_persist");

    let mut milk = open(&path, "milk");
    milk.append_row(&["Alice".into(), "2025-09-01 08:00:00".into()])
        .unwrap();
    milk.append_row(&["Bob".into(), "2025-09-01 08:01:00".into()])
        .unwrap();
    drop(milk);

    let mut juice = open(&path, "juice");
    assert_eq!(juice.read_all_rows().unwrap().len(), 1);

    let mut milk = open(&path, "milk");
    let rows = milk.read_all_rows().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2][0], "Bob");
}

#[test]
fn delete_rows_is_all_or_nothing() {
    let path = new_workbook("sqlite_delete");
    let mut sheet = open(&path, "milk");
    for n in ["A", "B", "C"] {
        sheet
            .append_row(&[n.into(), "2025-09-01 08:00:00".into()])
            .unwrap();
    }

    assert!(matches!(
        sheet.delete_rows(3, 5),
        Err(AppError::WriteRejected(_))
    ));
    assert!(matches!(
        sheet.delete_rows(1, 1),
        Err(AppError::WriteRejected(_))
    ));
    assert_eq!(sheet.read_all_rows().unwrap().len(), 4);

    sheet.delete_row(3).unwrap();
    let names: Vec<String> = sheet
        .read_all_rows()
        .unwrap()
        .into_iter()
        .skip(1)
        .map(|r| r[0].clone())
        .collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn facade_over_sqlite_and_audit_log() {
    let path = new_workbook("sqlite_facade");
    let sheet = open(&path, "milk");
    let mut store = AttendanceStore::new(
        sheet,
        StoreOptions {
            cache_ttl: Duration::from_secs(60),
            max_name_chars: 10,
        },
    );

    let at = NaiveDate::from_ymd_opt(2025, 9, 1)
        .unwrap()
        .and_hms_opt(8, 10, 0)
        .unwrap();
    store.append("Alice", at).unwrap();
    store.append("Bob", at).unwrap();
    assert_eq!(store.delete(0).unwrap().name, "Alice");
    assert_eq!(store.load().unwrap().get(0).unwrap().name, "Bob");
    assert_eq!(store.clear_all().unwrap(), ClearOutcome::Cleared(1));

    store.backend().audit("clear", "milk", "Deleted 1 records");
    let entries = load_log(store.backend().conn()).unwrap();
    assert!(entries.iter().any(|e| e.operation == "migration_applied"));
    assert!(entries.iter().any(|e| e.operation == "clear" && e.target == "milk"));
}
