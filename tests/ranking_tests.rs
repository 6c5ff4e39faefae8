mod common;
use common::{classify_default, record, ts, ymd};

use shiftmetrics::core::ranking::{low_utilization_flags, top_performers_by_day};

#[test]
fn test_top_performer_combines_shifts_per_day() {
    // ALICE averages 120 across AM and PM; BOB's single Night session at
    // 23:30 reports under the same shift day with 90.
    let records = classify_default(vec![
        record("ALICE", ts(2024, 1, 1, 7, 0, 0), 140),
        record("ALICE", ts(2024, 1, 1, 15, 0, 0), 100),
        record("BOB", ts(2024, 1, 1, 23, 30, 0), 90),
    ]);
    let top = top_performers_by_day(&records, 1.0);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].shift_day, ymd(2024, 1, 1));
    assert_eq!(top[0].operator, "ALICE");
    assert!((top[0].avg_per_session - 120.0).abs() < 1e-9);
    assert_eq!(top[0].session_count, 2);
}

#[test]
fn test_top_performer_one_row_per_day() {
    let records = classify_default(vec![
        record("ALICE", ts(2024, 1, 1, 7, 0, 0), 100),
        record("BOB", ts(2024, 1, 1, 8, 0, 0), 120),
        record("ALICE", ts(2024, 1, 2, 7, 0, 0), 130),
        record("BOB", ts(2024, 1, 2, 8, 0, 0), 90),
    ]);
    let top = top_performers_by_day(&records, 1.0);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].shift_day, ymd(2024, 1, 1));
    assert_eq!(top[0].operator, "BOB");
    assert_eq!(top[1].shift_day, ymd(2024, 1, 2));
    assert_eq!(top[1].operator, "ALICE");
}

#[test]
fn test_tie_breaks_to_ascending_operator_name() {
    let records = classify_default(vec![
        record("ZOE", ts(2024, 1, 1, 7, 0, 0), 100),
        record("ANNA", ts(2024, 1, 1, 8, 0, 0), 100),
        record("MIA", ts(2024, 1, 1, 9, 0, 0), 100),
    ]);
    let top = top_performers_by_day(&records, 1.0);
    assert_eq!(top[0].operator, "ANNA");
}

#[test]
fn test_low_utilization_flags_at_or_below_threshold() {
    let records = classify_default(vec![
        record("ALICE", ts(2024, 1, 1, 7, 0, 0), 100),
        record("ALICE", ts(2024, 1, 1, 8, 0, 0), 100),
        record("BOB", ts(2024, 1, 1, 9, 0, 0), 100),
        record("BOB", ts(2024, 1, 2, 9, 0, 0), 100),
    ]);

    // Default threshold 1: only single-session pairs are flagged.
    let flags = low_utilization_flags(&records, 1.0, 1);
    assert_eq!(flags.len(), 2);
    assert!(flags.iter().all(|f| f.operator == "BOB"));
    assert!(flags.iter().all(|f| f.session_count == 1));

    // Threshold 2 also catches ALICE's two-session day.
    let flags = low_utilization_flags(&records, 1.0, 2);
    assert_eq!(flags.len(), 3);

    // Threshold 0 flags nothing: every present pair has at least one row.
    assert!(low_utilization_flags(&records, 1.0, 0).is_empty());
}

#[test]
fn test_empty_batch_produces_empty_outputs() {
    assert!(top_performers_by_day(&[], 1.0).is_empty());
    assert!(low_utilization_flags(&[], 1.0, 1).is_empty());
}
