use chrono::NaiveDate;
use milklog::core::{AttendanceStore, CacheState, ClearOutcome, StoreOptions};
use milklog::errors::AppError;
use milklog::sheet::{MemorySheet, SheetBackend};
use milklog::utils::clock::ManualClock;
use std::time::Duration;

fn header() -> Vec<String> {
    vec!["name".to_string(), "timestamp".to_string()]
}

fn opts(ttl_secs: u64) -> StoreOptions {
    StoreOptions {
        cache_ttl: Duration::from_secs(ttl_secs),
        max_name_chars: 10,
    }
}

fn at(h: u32, m: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 1)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn store(ttl_secs: u64) -> (AttendanceStore<MemorySheet, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let s = AttendanceStore::with_clock(MemorySheet::new(&header()), opts(ttl_secs), clock.clone());
    (s, clock)
}

fn names(s: &mut AttendanceStore<MemorySheet, ManualClock>) -> Vec<String> {
    s.load_fresh()
        .unwrap()
        .iter()
        .map(|r| r.name.clone())
        .collect()
}

#[test]
fn register_list_delete_clear() {
    let (mut s, _) = store(60);

    s.append("Alice", at(8, 10)).unwrap();
    s.append("Bob", at(8, 12)).unwrap();

    let log = s.load().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log.get(0).unwrap().name, "Alice");
    assert_eq!(log.get(0).unwrap().timestamp, "2025-09-01 08:10:00");
    assert_eq!(log.get(1).unwrap().name, "Bob");

    let removed = s.delete(0).unwrap();
    assert_eq!(removed.name, "Alice");
    assert_eq!(names(&mut s), vec!["Bob"]);

    assert_eq!(s.clear_all().unwrap(), ClearOutcome::Cleared(1));
    assert!(s.load().unwrap().is_empty());
    // header survives
    assert_eq!(s.backend().rows(), &[header()]);
}

fn pairs(log: &milklog::models::AttendanceLog) -> Vec<(String, String)> {
    log.iter()
        .map(|r| (r.name.clone(), r.timestamp.clone()))
        .collect()
}

#[test]
fn alice_then_bob_delete_first_leaves_bob() {
    let (mut s, _) = store(60);
    let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    s.append("Alice", jan1.and_hms_opt(9, 0, 0).unwrap()).unwrap();
    s.append("Bob", jan1.and_hms_opt(9, 5, 0).unwrap()).unwrap();
    assert_eq!(
        pairs(&s.load().unwrap()),
        vec![
            ("Alice".to_string(), "2024-01-01 09:00:00".to_string()),
            ("Bob".to_string(), "2024-01-01 09:05:00".to_string()),
        ]
    );

    s.delete(0).unwrap();
    assert_eq!(
        pairs(&s.load().unwrap()),
        vec![("Bob".to_string(), "2024-01-01 09:05:00".to_string())]
    );
}

#[test]
fn append_trims_and_validates_before_writing() {
    let (mut s, _) = store(60);

    let rec = s.append("  Chloe  ", at(9, 0)).unwrap();
    assert_eq!(rec.name, "Chloe");

    assert!(matches!(
        s.append("   ", at(9, 0)),
        Err(AppError::ValidationFailed(_))
    ));
    assert!(matches!(
        s.append("Bartholomew", at(9, 0)),
        Err(AppError::ValidationFailed(_))
    ));
    // ten characters, counted as characters not bytes
    s.append("김민준김민준김민준김", at(9, 1)).unwrap();

    assert_eq!(s.backend().rows().len(), 3);
}

#[test]
fn delete_maps_index_to_sheet_row() {
    let (mut s, _) = store(60);
    for (i, n) in ["A", "B", "C"].iter().enumerate() {
        s.append(n, at(8, i as u32)).unwrap();
    }
    s.load().unwrap();

    assert_eq!(s.delete(1).unwrap().name, "B");
    assert_eq!(names(&mut s), vec!["A", "C"]);
}

#[test]
fn out_of_range_positions_touch_nothing() {
    let (mut s, _) = store(60);
    s.append("Alice", at(8, 0)).unwrap();
    s.load().unwrap();

    assert!(matches!(
        s.delete(1),
        Err(AppError::IndexOutOfRange { index: 1, len: 1 })
    ));
    // display position 0 is index -1
    assert!(matches!(
        s.delete_display(0),
        Err(AppError::IndexOutOfRange { index: -1, len: 1 })
    ));
    assert!(matches!(
        s.delete_display(-5),
        Err(AppError::IndexOutOfRange { .. })
    ));
    assert_eq!(s.backend().rows().len(), 2);

    assert_eq!(s.delete_display(1).unwrap().name, "Alice");
}

#[test]
fn delete_on_empty_log_is_out_of_range() {
    let (mut s, _) = store(60);
    assert!(matches!(
        s.delete(0),
        Err(AppError::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn clear_on_empty_log_is_a_no_op() {
    let (mut s, _) = store(60);
    assert_eq!(s.clear_all().unwrap(), ClearOutcome::AlreadyEmpty);
    assert_eq!(s.backend().rows(), &[header()]);
}

#[test]
fn load_is_served_from_cache_until_ttl() {
    let (mut s, clock) = store(60);
    s.backend_mut().push_external(&["Alice", "2025-09-01 08:00:00"]);

    let first = s.load().unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(s.backend().fetch_count(), 1);
    assert_eq!(s.cache_state(), CacheState::Fresh);

    // another client writes; the cached snapshot is still served
    s.backend_mut().push_external(&["Bob", "2025-09-01 08:01:00"]);
    clock.advance(Duration::from_secs(59));
    let second = s.load().unwrap();
    assert_eq!(first, second);
    assert_eq!(s.backend().fetch_count(), 1);

    clock.advance(Duration::from_secs(1));
    assert_eq!(s.cache_state(), CacheState::Stale);
    assert_eq!(s.load().unwrap().len(), 2);
    assert_eq!(s.backend().fetch_count(), 2);
}

#[test]
fn writes_invalidate_the_cache() {
    let (mut s, _) = store(60);
    s.load().unwrap();
    assert_eq!(s.backend().fetch_count(), 1);

    s.append("Alice", at(8, 0)).unwrap();
    assert_eq!(s.load().unwrap().len(), 1);
    assert_eq!(s.backend().fetch_count(), 2);

    s.delete(0).unwrap();
    assert!(s.load().unwrap().is_empty());
    assert_eq!(s.backend().fetch_count(), 3);
}

#[test]
fn zero_ttl_always_reads_the_sheet() {
    let (mut s, _) = store(0);
    s.load().unwrap();
    s.load().unwrap();
    assert_eq!(s.backend().fetch_count(), 2);
}

#[test]
fn failed_writes_leave_sheet_and_cache_alone() {
    let (mut s, _) = store(60);
    s.append("Alice", at(8, 0)).unwrap();
    s.load().unwrap();
    let fetches = s.backend().fetch_count();

    s.backend_mut().set_fail_writes(true);
    assert!(matches!(
        s.append("Bob", at(8, 1)),
        Err(AppError::WriteRejected(_))
    ));
    assert!(matches!(s.delete(0), Err(AppError::WriteRejected(_))));
    assert!(matches!(s.clear_all(), Err(AppError::WriteRejected(_))));

    assert_eq!(s.backend().rows().len(), 2);
    s.backend_mut().set_fail_writes(false);

    // clear_all re-read the sheet; the snapshot it cached is still valid
    let before = s.backend().fetch_count();
    assert!(before > fetches);
    assert_eq!(s.load().unwrap().len(), 1);
    assert_eq!(s.backend().fetch_count(), before);
}

#[test]
fn unavailable_store_surfaces_on_load() {
    let (mut s, _) = store(60);
    s.backend_mut().set_fail_reads(true);
    assert!(matches!(s.load(), Err(AppError::StoreUnavailable(_))));
    assert!(matches!(s.clear_all(), Err(AppError::StoreUnavailable(_))));
}

#[test]
fn malformed_rows_keep_their_position() {
    let sheet = MemorySheet::with_rows(
        &header(),
        vec![
            vec!["Alice".into()],
            vec![" Bob ".into(), "yesterday".into(), "extra".into()],
            vec!["Chloe".into(), "2025-09-01 08:00:00".into()],
        ],
    );
    let mut s = AttendanceStore::with_clock(sheet, opts(60), ManualClock::new());

    let log = s.load().unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(log.get(0).unwrap().timestamp, "");
    assert_eq!(log.get(1).unwrap().name, "Bob");

    assert_eq!(s.delete(2).unwrap().name, "Chloe");
    assert_eq!(s.backend().rows().len(), 3);
}

#[test]
fn delete_rows_rejects_header_and_missing_rows() {
    let mut sheet = MemorySheet::new(&header());
    sheet.push_external(&["Alice", "2025-09-01 08:00:00"]);

    assert!(sheet.delete_rows(1, 2).is_err());
    assert!(sheet.delete_rows(2, 3).is_err());
    assert_eq!(sheet.rows().len(), 2);
    sheet.delete_row(2).unwrap();
    assert_eq!(sheet.rows().len(), 1);
}
