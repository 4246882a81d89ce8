use super::*;
use std::io::Write;

#[test]
fn loads_valid_yaml_mapping() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "update_every: 5\npriority: 1").unwrap();

    let value = load_yaml_file(file.path()).unwrap();
    assert_eq!(value.get("update_every").and_then(Value::as_i64), Some(5));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_yaml_file(Path::new("/nonexistent/path/does-not-exist.conf")).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Io { .. }));
}

#[test]
fn malformed_yaml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "a: [unterminated").unwrap();

    let err = load_yaml_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn empty_file_yields_null_value() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let value = load_yaml_file(file.path()).unwrap();
    assert_eq!(value, Value::Scalar(crate::value::Scalar::Null));
}
