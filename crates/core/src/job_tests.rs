use super::*;
use crate::value::Scalar;

#[test]
fn timetable_is_due_immediately_after_creation() {
    let tt = Timetable::new(2, 100_000);
    assert!(tt.is_due(100_000));
    assert!(tt.is_due(100_001));
    assert!(!tt.is_due(99_999));
}

#[test]
fn since_last_is_zero_on_first_run_regardless_of_last() {
    let mut tt = Timetable::new(2, 100_000);
    tt.last_epoch_ms = Some(50_000);
    assert_eq!(tt.since_last_micros(100_000, true), 0);
}

#[test]
fn since_last_converts_ms_delta_to_micros() {
    let mut tt = Timetable::new(2, 0);
    tt.last_epoch_ms = Some(100_000);
    assert_eq!(tt.since_last_micros(102_000, false), 2_000_000);
}

#[test]
fn advance_on_success_aligns_to_next_multiple_of_freq() {
    let mut tt = Timetable::new(2, 100_000);
    tt.advance_on_success(100_000, 100_050);
    // freq = 2000ms; floor(100_050/2000 + 1) * 2000 = 51*2000 = 102_000
    assert_eq!(tt.next_epoch_ms, 102_000);
    assert_eq!(tt.last_epoch_ms, Some(100_000));
}

#[test]
fn advance_on_failure_pushes_back_by_one_period_without_touching_last() {
    let mut tt = Timetable::new(5, 100_000);
    tt.last_epoch_ms = Some(95_000);
    tt.advance_on_failure();
    assert_eq!(tt.next_epoch_ms, 105_000);
    assert_eq!(tt.last_epoch_ms, Some(95_000));
}

#[test]
fn timetable_clamps_zero_freq_to_one_second() {
    let tt = Timetable::new(0, 0);
    assert_eq!(tt.freq_secs, 1);
}

fn defaults() -> JobConfig {
    JobConfig::new(10, 90_000, 3)
}

#[test]
fn backfill_fills_missing_required_keys_from_defaults() {
    let mut map = indexmap::IndexMap::new();
    map.insert("update_every".to_string(), Value::Scalar(Scalar::Int(1)));
    let value = Value::Mapping(map);

    let config = backfill_required_keys(&value, &defaults());
    assert_eq!(config.update_every, 1);
    assert_eq!(config.priority, 90_000);
    assert_eq!(config.retries, 3);
}

#[test]
fn backfill_strips_required_keys_from_extra() {
    let mut map = indexmap::IndexMap::new();
    map.insert("update_every".to_string(), Value::Scalar(Scalar::Int(1)));
    map.insert("host".to_string(), Value::Scalar(Scalar::from("db1")));
    let value = Value::Mapping(map);

    let config = backfill_required_keys(&value, &defaults());
    assert_eq!(config.extra.get("update_every"), None);
    assert_eq!(config.extra.get("host").and_then(Value::as_str), Some("db1"));
}

#[test]
fn backfill_falls_through_on_failed_coercion() {
    let mut map = indexmap::IndexMap::new();
    map.insert(
        "update_every".to_string(),
        Value::Scalar(Scalar::String("not-a-number".to_string())),
    );
    let value = Value::Mapping(map);

    let config = backfill_required_keys(&value, &defaults());
    assert_eq!(config.update_every, 10);
}
