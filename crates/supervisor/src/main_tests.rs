use super::*;
use chartsup_collectors::FakeModule;
use chartsup_core::FakeClock;
use std::path::PathBuf;
use std::sync::Arc;

fn settings() -> Settings {
    Settings {
        modules_dir: PathBuf::from("/tmp"),
        config_dir: PathBuf::from("/tmp/does-not-exist"),
        update_every_default: 1,
        program: "chartsupd".to_string(),
        selection: vec![],
        debug: false,
        override_update_every: None,
    }
}

#[test]
fn build_all_jobs_materializes_and_builds_one_job_per_module() {
    let module: Arc<dyn Module> = Arc::new(FakeModule::new("demo"));
    let base = BaseConfig::default();
    let clock = FakeClock::new();

    let jobs = build_all_jobs(&[module], &settings(), &base, &clock);

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].chart_name, "demo");
}

#[test]
fn build_all_jobs_handles_multiple_modules_independently() {
    let first: Arc<dyn Module> = Arc::new(FakeModule::new("alpha"));
    let second: Arc<dyn Module> = Arc::new(FakeModule::new("beta"));
    let base = BaseConfig::default();
    let clock = FakeClock::new();

    let jobs = build_all_jobs(&[first, second], &settings(), &base, &clock);

    let mut chart_names: Vec<&str> = jobs.iter().map(|job| job.chart_name.as_str()).collect();
    chart_names.sort_unstable();
    assert_eq!(chart_names, vec!["alpha", "beta"]);
}

#[test]
fn disable_and_exit_prints_the_disable_line_and_does_not_panic() {
    // ExitCode has no public introspection; this exercises the logging +
    // stdout side effects without asserting on the opaque return value.
    let _ = disable_and_exit("unit test reason");
}
