use super::*;

#[test]
fn from_bool_maps_true_to_success() {
    assert_eq!(OpOutcome::from_bool(true), OpOutcome::Success);
    assert_eq!(OpOutcome::from_bool(false), OpOutcome::Declined);
}

#[test]
fn guarded_passes_through_normal_outcome() {
    let outcome = guarded(|| OpOutcome::Success);
    assert_eq!(outcome, OpOutcome::Success);
}

#[test]
fn guarded_converts_panic_with_str_payload() {
    let outcome = guarded(|| panic!("boom"));
    match outcome {
        OpOutcome::Crashed(reason) => assert!(reason.contains("boom")),
        other => panic!("expected Crashed, got {other:?}"),
    }
}

#[test]
fn guarded_converts_panic_with_string_payload() {
    let outcome = guarded(|| panic!("{}", "formatted boom".to_string()));
    match outcome {
        OpOutcome::Crashed(reason) => assert!(reason.contains("formatted boom")),
        other => panic!("expected Crashed, got {other:?}"),
    }
}
