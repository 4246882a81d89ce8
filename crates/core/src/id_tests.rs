use super::*;

#[test]
fn strips_exact_suffix() {
    assert_eq!(
        ModuleName::from_filename("mysql.chart.py"),
        Some(ModuleName::new("mysql"))
    );
}

#[test]
fn rejects_missing_suffix() {
    assert_eq!(ModuleName::from_filename("mysql.py"), None);
}

#[test]
fn rejects_empty_stem() {
    // Exact-suffix stripping of just the suffix itself leaves an empty name.
    assert_eq!(ModuleName::from_filename(".chart.py"), None);
}

#[test]
fn does_not_false_match_on_letter_subset() {
    // Regression for the source's character-class trim bug (SPEC_FULL.md §9):
    // a name built only from letters in ".chart.py" must not be treated as
    // having the suffix stripped away entirely.
    assert_eq!(
        ModuleName::from_filename("chart.chart.py"),
        Some(ModuleName::new("chart"))
    );
    assert_eq!(ModuleName::from_filename("chart.py"), None);
}

#[test]
fn filename_roundtrips() {
    let name = ModuleName::new("postgres");
    assert_eq!(ModuleName::from_filename(&name.filename()), Some(name));
}
