// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic scheduler (SPEC_FULL.md §4.8): multiplexes every running job's
//! heterogeneous period onto a single thread, one pass at a time.

use crate::factory::BuiltJob;
use crate::protocol;
use chartsup_collectors::{guarded, OpOutcome};
use chartsup_core::Clock;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

/// Why [`run_forever`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorHalt {
    /// Every job has been dropped; there is nothing left to schedule.
    NoJobsRemaining,
}

/// Run every currently-due job exactly once. `first_run` is cleared the
/// moment any job completes its first successful update; it is a
/// process-wide flag, not a per-job one (SPEC_FULL.md §4.8).
///
/// Returns the number of milliseconds to sleep before the next pass
/// should run, or `None` if `jobs` is empty (the caller should treat this
/// as fatal).
pub fn run_pass(jobs: &mut Vec<BuiltJob>, clock: &impl Clock, first_run: &mut bool) -> Option<u64> {
    if jobs.is_empty() {
        return None;
    }

    let t_start = clock.epoch_ms();
    let mut i = 0;
    while i < jobs.len() {
        if jobs[i].timetable.is_due(t_start) {
            if run_one_update(&mut jobs[i], clock, t_start, *first_run) {
                *first_run = false;
                i += 1;
            } else {
                jobs.remove(i);
            }
        } else {
            i += 1;
        }
    }

    let next_due = jobs.iter().map(|job| job.timetable.next_epoch_ms).min();
    next_due.map(|deadline| deadline.saturating_sub(clock.epoch_ms()))
}

/// Run one job's `update()`, advancing its timetable and retry budget.
/// Returns `false` if the job should be dropped.
fn run_one_update(job: &mut BuiltJob, clock: &impl Clock, t_start: u64, first_run: bool) -> bool {
    let since_last_micros = job.timetable.since_last_micros(t_start, first_run);
    let call_started = clock.now();
    let outcome = guarded(AssertUnwindSafe(|| job.collector.update(since_last_micros)));
    let elapsed_ms = clock.now().duration_since(call_started).as_millis() as i64;

    match outcome {
        OpOutcome::Success => {
            let t_end = clock.epoch_ms();
            job.timetable.advance_on_success(t_start, t_end);
            job.retries_left = job.retries;
            print!(
                "{}",
                protocol::runtime_update_lines(&job.chart_name, since_last_micros, elapsed_ms)
            );
            true
        }
        OpOutcome::NotImplemented => {
            tracing::error!(job = %job.chart_name, "no update() function. Disabling it.");
            false
        }
        OpOutcome::Crashed(reason) => {
            tracing::error!(job = %job.chart_name, "misbehaving. Reason: {reason}");
            false
        }
        OpOutcome::Declined => {
            tracing::error!(job = %job.chart_name, "update() function reports failure.");

            if job.retries_left == 0 {
                tracing::error!(job = %job.chart_name, "disabled job, exceeded retry limit.");
                return false;
            }
            job.retries_left -= 1;
            job.timetable.advance_on_failure();
            true
        }
    }
}

/// Drive the scheduler until every job has been dropped.
pub fn run_forever(mut jobs: Vec<BuiltJob>, clock: &impl Clock) -> SupervisorHalt {
    let mut first_run = true;
    loop {
        match run_pass(&mut jobs, clock, &mut first_run) {
            None => return SupervisorHalt::NoJobsRemaining,
            Some(sleep_ms) => {
                let deadline = clock.now() + Duration::from_millis(sleep_ms);
                clock.sleep_until(deadline);
            }
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
