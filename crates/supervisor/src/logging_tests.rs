use super::*;

#[test]
fn info_event_renders_with_program_prefix() {
    let formatter = LineFormatter::new("chartsupd");
    let fields = EventFields {
        message: Some("daemon ready".to_string()),
        fatal: false,
        extra: Vec::new(),
    };
    assert_eq!(
        formatter.render(&fields, &tracing::Level::INFO),
        "chartsupd INFO:  daemon ready"
    );
}

#[test]
fn fatal_flag_overrides_the_rendered_level_even_though_severity_is_error() {
    let formatter = LineFormatter::new("chartsupd");
    let fields = EventFields {
        message: Some("no modules loaded".to_string()),
        fatal: true,
        extra: Vec::new(),
    };
    assert_eq!(
        formatter.render(&fields, &tracing::Level::ERROR),
        "chartsupd FATAL:  no modules loaded"
    );
}

#[test]
fn error_without_fatal_flag_renders_as_error() {
    let formatter = LineFormatter::new("chartsupd");
    let fields = EventFields {
        message: Some("misbehaving. Reason: boom".to_string()),
        fatal: false,
        extra: Vec::new(),
    };
    assert_eq!(
        formatter.render(&fields, &tracing::Level::ERROR),
        "chartsupd ERROR:  misbehaving. Reason: boom"
    );
}

#[test]
fn debug_level_renders_as_debug() {
    let formatter = LineFormatter::new("chartsupd");
    let fields = EventFields {
        message: Some("skipping module".to_string()),
        fatal: false,
        extra: Vec::new(),
    };
    assert_eq!(
        formatter.render(&fields, &tracing::Level::DEBUG),
        "chartsupd DEBUG:  skipping module"
    );
}

#[test]
fn extra_fields_are_appended_as_key_equals_value_tokens() {
    let formatter = LineFormatter::new("chartsupd");
    let fields = EventFields {
        message: Some("failed to load explicitly selected module".to_string()),
        fatal: false,
        extra: vec![("module".to_string(), "foo".to_string())],
    };
    assert_eq!(
        formatter.render(&fields, &tracing::Level::ERROR),
        "chartsupd ERROR:  failed to load explicitly selected module module=foo"
    );
}
