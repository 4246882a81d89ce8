use super::*;
use std::fs;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), "").expect("write marker");
}

#[test]
fn check_token_is_a_no_op() {
    let dir = tempfile::tempdir().expect("tempdir");
    let parsed = parse_args(&["check".to_string()], dir.path());
    assert!(parsed.selection.is_empty());
    assert!(!parsed.debug);
    assert!(parsed.override_update_every.is_none());
}

#[test]
fn debug_and_all_tokens_enable_debug() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(parse_args(&["debug".to_string()], dir.path()).debug);
    assert!(parse_args(&["all".to_string()], dir.path()).debug);
}

#[test]
fn matching_filename_selects_module_and_enables_debug() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "foo.chart.py");

    let parsed = parse_args(&["foo.chart.py".to_string()], dir.path());

    assert_eq!(parsed.selection, vec![ModuleName::new("foo")]);
    assert!(parsed.debug);
}

#[test]
fn positive_integer_token_overrides_update_every() {
    let dir = tempfile::tempdir().expect("tempdir");
    let parsed = parse_args(&["5".to_string()], dir.path());
    assert_eq!(parsed.override_update_every, Some(5));
}

#[test]
fn zero_or_negative_integer_token_is_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(parse_args(&["0".to_string()], dir.path())
        .override_update_every
        .is_none());
    assert!(parse_args(&["-5".to_string()], dir.path())
        .override_update_every
        .is_none());
}

#[test]
fn unrecognized_token_is_silently_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let parsed = parse_args(&["nonsense".to_string()], dir.path());
    assert!(parsed.selection.is_empty());
    assert!(!parsed.debug);
    assert!(parsed.override_update_every.is_none());
}

#[test]
fn selected_modules_accumulate_across_multiple_tokens() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "foo.chart.py");
    touch(dir.path(), "bar.chart.py");

    let parsed = parse_args(
        &["foo.chart.py".to_string(), "bar.chart.py".to_string()],
        dir.path(),
    );

    assert_eq!(
        parsed.selection,
        vec![ModuleName::new("foo"), ModuleName::new("bar")]
    );
}

#[test]
fn effective_override_update_every_requires_debug() {
    let settings = Settings {
        modules_dir: PathBuf::from("/tmp"),
        config_dir: PathBuf::from("/tmp"),
        update_every_default: 1,
        program: "chartsupd".to_string(),
        selection: vec![],
        debug: false,
        override_update_every: Some(5),
    };
    assert_eq!(settings.effective_override_update_every(), None);

    let debug_settings = Settings {
        debug: true,
        ..settings
    };
    assert_eq!(debug_settings.effective_override_update_every(), Some(5));
}

#[test]
fn plugin_conf_disables_voluntarily_when_enabled_is_false() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("python.d.conf"), "enabled: false\n").expect("write conf");

    let settings = Settings {
        modules_dir: dir.path().to_path_buf(),
        config_dir: dir.path().to_path_buf(),
        update_every_default: 1,
        program: "chartsupd".to_string(),
        selection: vec![],
        debug: false,
        override_update_every: None,
    };

    assert_eq!(
        apply_plugin_conf(&settings),
        PluginDisposition::VoluntaryDisable
    );
}

#[test]
fn plugin_conf_overrides_base_config_and_collects_disabled_modules() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("python.d.conf"),
        "priority: 1000\nfoo: false\n",
    )
    .expect("write conf");

    let settings = Settings {
        modules_dir: dir.path().to_path_buf(),
        config_dir: dir.path().to_path_buf(),
        update_every_default: 1,
        program: "chartsupd".to_string(),
        selection: vec![],
        debug: false,
        override_update_every: None,
    };

    match apply_plugin_conf(&settings) {
        PluginDisposition::Proceed {
            base,
            disabled,
            debug,
        } => {
            assert_eq!(base.priority, 1000);
            assert_eq!(disabled, vec![ModuleName::new("foo")]);
            assert!(!debug);
        }
        other => panic!("expected Proceed, got {other:?}"),
    }
}

#[test]
fn missing_plugin_conf_proceeds_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");

    let settings = Settings {
        modules_dir: dir.path().to_path_buf(),
        config_dir: dir.path().to_path_buf(),
        update_every_default: 1,
        program: "chartsupd".to_string(),
        selection: vec![],
        debug: false,
        override_update_every: None,
    };

    match apply_plugin_conf(&settings) {
        PluginDisposition::Proceed { disabled, .. } => assert!(disabled.is_empty()),
        other => panic!("expected Proceed, got {other:?}"),
    }
}
