// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Check/create phase driver (SPEC_FULL.md §4.7): runs every job's
//! `check()`, then every surviving job's `create()`, dropping a job the
//! moment either operation fails to report success. Failure reasons are
//! logged; they never propagate as an `Err` since a single job's failure
//! is never fatal to the process on its own.

use crate::factory::BuiltJob;
use crate::protocol;
use chartsup_collectors::{guarded, OpOutcome};
use std::panic::AssertUnwindSafe;

/// Run `check()` on every job, keeping only those that report success.
pub fn run_check_phase(jobs: Vec<BuiltJob>) -> Vec<BuiltJob> {
    jobs.into_iter()
        .filter_map(|mut job| {
            let outcome = guarded(AssertUnwindSafe(|| job.collector.check()));
            if log_and_drop("check", &job, &outcome) {
                Some(job)
            } else {
                None
            }
        })
        .collect()
}

/// Run `create()` on every job, keeping only those that report success.
/// A successful `create()` also emits the job's runtime chart-definition
/// lines on stdout (SPEC_FULL.md §6).
pub fn run_create_phase(jobs: Vec<BuiltJob>) -> Vec<BuiltJob> {
    jobs.into_iter()
        .filter_map(|mut job| {
            let outcome = guarded(AssertUnwindSafe(|| job.collector.create()));
            if log_and_drop("create", &job, &outcome) {
                print!("{}", protocol::runtime_chart_lines(&job.chart_name, job.timetable.freq_secs));
                Some(job)
            } else {
                None
            }
        })
        .collect()
}

/// Log an operation's outcome at the appropriate level; returns `true`
/// only for [`OpOutcome::Success`].
fn log_and_drop(op: &str, job: &BuiltJob, outcome: &OpOutcome) -> bool {
    match outcome {
        OpOutcome::Success => true,
        OpOutcome::Declined => {
            tracing::error!(job = %job.chart_name, "{op}() function reports failure.");
            false
        }
        OpOutcome::NotImplemented => {
            tracing::error!(job = %job.chart_name, "no {op}() function. Disabling it.");
            false
        }
        OpOutcome::Crashed(reason) => {
            tracing::error!(job = %job.chart_name, "misbehaving. Reason: {reason}");
            false
        }
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
