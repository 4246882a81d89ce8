// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job Factory (SPEC_FULL.md §4.6): turns a materialized [`ModuleConfig`]
//! into live [`BuiltJob`]s, one per `(module, job-name)` pair. Construction
//! failure is a per-job concern — a multi-job module continues with
//! whichever of its jobs built successfully.

use crate::settings::Settings;
use chartsup_collectors::{Collector, Module};
use chartsup_core::{ModuleConfig, Timetable};

/// A live job: a constructed [`Collector`] plus the bookkeeping the
/// lifecycle driver and scheduler need (SPEC_FULL.md §3, "Job").
pub struct BuiltJob {
    pub job_name: Option<String>,
    pub chart_name: String,
    pub collector: Box<dyn Collector>,
    pub timetable: Timetable,
    pub retries: u32,
    pub retries_left: u32,
}

/// Build every job named in `config` against `module`. `now_epoch_ms`
/// seeds each job's initial timetable (due immediately).
pub fn build_jobs(
    module: &dyn Module,
    config: &ModuleConfig,
    settings: &Settings,
    now_epoch_ms: u64,
) -> Vec<BuiltJob> {
    let mut jobs = Vec::new();
    for (job_name, job_config) in config {
        let mut job_config = job_config.clone();
        if let Some(freq) = settings.effective_override_update_every() {
            job_config.update_every = freq;
        }

        match module.make_job(&job_config, job_name.as_deref()) {
            Ok(collector) => {
                let chart_name = chart_name_for(module.name().as_str(), job_name.as_deref());
                jobs.push(BuiltJob {
                    job_name: job_name.clone(),
                    chart_name,
                    collector,
                    timetable: Timetable::new(job_config.update_every, now_epoch_ms),
                    retries: job_config.retries,
                    retries_left: job_config.retries,
                });
            }
            Err(err) => {
                tracing::error!(
                    module = %module.name(),
                    job = ?job_name,
                    error = %err,
                    "failed to construct job, skipping"
                );
            }
        }
    }
    jobs
}

fn chart_name_for(module_name: &str, job_name: Option<&str>) -> String {
    match job_name {
        Some(name) => format!("{module_name}_{name}"),
        None => module_name.to_string(),
    }
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;
