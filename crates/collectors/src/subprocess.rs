// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Out-of-process collector adapter (SPEC_FULL.md §9, variant (b)).
//!
//! A subprocess collector is any executable discovered at
//! `<modules-dir>/<name>.chart.py`. Each of the three operations is
//! invoked as a short-lived child process — `<executable> check`,
//! `<executable> create`, `<executable> update <since_last_micros>` —
//! which inherits the supervisor's stdout so its own chart/metric lines
//! land on the shared wire protocol directly, while its outcome is
//! reported back to the supervisor through its exit status:
//!
//! | exit code | meaning                     |
//! |-----------|------------------------------|
//! | 0         | success                       |
//! | 1         | declined (reported `false`)   |
//! | 127       | operation not implemented     |
//! | other     | crashed (stderr tail = reason)|
//!
//! Job configuration is passed to the child as a JSON document in the
//! `CHARTSUP_JOB_CONFIG` environment variable; the job name (if any) in
//! `CHARTSUP_JOB_NAME`.

use crate::collector::{Collector, JobConstructError, Module};
use crate::outcome::OpOutcome;
use chartsup_core::value::Scalar;
use chartsup_core::{JobConfig, ModuleName};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A collector module backed by an executable file.
pub struct SubprocessModule {
    name: ModuleName,
    executable: PathBuf,
}

impl SubprocessModule {
    pub fn new(name: ModuleName, executable: PathBuf) -> Self {
        Self { name, executable }
    }
}

impl Module for SubprocessModule {
    fn name(&self) -> &ModuleName {
        &self.name
    }

    /// Subprocess collectors declare no attributes of their own; the
    /// materializer falls through to the process-wide base config for any
    /// key they don't set in their `.conf` file.
    fn attribute(&self, _key: &str) -> Option<Scalar> {
        None
    }

    fn make_job(
        &self,
        config: &JobConfig,
        job_name: Option<&str>,
    ) -> Result<Box<dyn Collector>, JobConstructError> {
        Ok(Box::new(SubprocessCollector {
            executable: self.executable.clone(),
            job_name: job_name.map(str::to_string),
            config: config.clone(),
        }))
    }
}

pub struct SubprocessCollector {
    executable: PathBuf,
    job_name: Option<String>,
    config: JobConfig,
}

#[derive(Serialize)]
struct JobConfigWire<'a> {
    update_every: u64,
    priority: i64,
    retries: u32,
    extra: &'a chartsup_core::Value,
}

impl SubprocessCollector {
    fn invoke(&mut self, op: &str, extra_args: &[String]) -> OpOutcome {
        let mut cmd = Command::new(&self.executable);
        cmd.arg(op).args(extra_args);
        if let Some(name) = &self.job_name {
            cmd.env("CHARTSUP_JOB_NAME", name);
        }
        let wire = JobConfigWire {
            update_every: self.config.update_every,
            priority: self.config.priority,
            retries: self.config.retries,
            extra: &self.config.extra,
        };
        if let Ok(json) = serde_json::to_string(&wire) {
            cmd.env("CHARTSUP_JOB_CONFIG", json);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::piped());

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => return OpOutcome::Crashed(format!("failed to spawn: {e}")),
        };
        let mut stderr = String::new();
        if let Some(mut pipe) = child.stderr.take() {
            let _ = pipe.read_to_string(&mut stderr);
        }
        let status = match child.wait() {
            Ok(status) => status,
            Err(e) => return OpOutcome::Crashed(format!("failed to wait: {e}")),
        };

        match status.code() {
            Some(0) => OpOutcome::Success,
            Some(1) => OpOutcome::Declined,
            Some(127) => OpOutcome::NotImplemented,
            _ => {
                let reason = stderr_tail(&stderr)
                    .unwrap_or_else(|| format!("exited with status {status}"));
                OpOutcome::Crashed(reason)
            }
        }
    }
}

fn stderr_tail(stderr: &str) -> Option<String> {
    stderr.lines().next_back().map(str::to_string).filter(|s| !s.is_empty())
}

impl Collector for SubprocessCollector {
    fn check(&mut self) -> OpOutcome {
        self.invoke("check", &[])
    }

    fn create(&mut self) -> OpOutcome {
        self.invoke("create", &[])
    }

    fn update(&mut self, since_last_micros: i64) -> OpOutcome {
        self.invoke("update", &[since_last_micros.to_string()])
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
