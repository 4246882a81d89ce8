// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job configuration and scheduling data model (SPEC_FULL.md §3).

use crate::value::Value;
use indexmap::IndexMap;

/// Keys every materialized [`JobConfig`] is guaranteed to carry.
pub const REQUIRED_KEYS: [&str; 3] = ["update_every", "priority", "retries"];

/// A fully materialized per-job configuration: the three required keys,
/// typed, plus whatever else the module/config file declared, passed
/// through opaquely to the collector's job constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct JobConfig {
    pub update_every: u64,
    pub priority: i64,
    pub retries: u32,
    /// Remaining keys after the three required ones are stripped out.
    /// Always a [`Value::Mapping`].
    pub extra: Value,
}

impl JobConfig {
    pub fn new(update_every: u64, priority: i64, retries: u32) -> Self {
        Self {
            update_every: update_every.max(1),
            priority,
            retries,
            extra: Value::mapping(),
        }
    }

    pub fn with_extra(mut self, extra: Value) -> Self {
        self.extra = extra;
        self
    }
}

/// Job-name → JobConfig. `None` is the sentinel for a single-job module; a
/// multi-job module uses `Some(name)` keys.
pub type ModuleConfig = IndexMap<Option<String>, JobConfig>;

/// Per-job scheduling record (SPEC_FULL.md §3, §4.8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    /// Period, in seconds. Always >= 1.
    pub freq_secs: u64,
    /// Wall time (epoch milliseconds) of the last successful update.
    pub last_epoch_ms: Option<u64>,
    /// Wall time (epoch milliseconds) at which the next update is due.
    pub next_epoch_ms: u64,
}

impl Timetable {
    /// A freshly constructed timetable is due immediately at `now_epoch_ms`.
    pub fn new(freq_secs: u64, now_epoch_ms: u64) -> Self {
        Self {
            freq_secs: freq_secs.max(1),
            last_epoch_ms: None,
            next_epoch_ms: now_epoch_ms,
        }
    }

    fn freq_ms(&self) -> u64 {
        self.freq_secs * 1000
    }

    pub fn is_due(&self, now_epoch_ms: u64) -> bool {
        self.next_epoch_ms <= now_epoch_ms
    }

    /// Microseconds elapsed since the last successful update, or 0 if this
    /// is the very first update of the process, or this job has never
    /// updated successfully before.
    pub fn since_last_micros(&self, t_start_epoch_ms: u64, first_run: bool) -> i64 {
        if first_run {
            return 0;
        }
        match self.last_epoch_ms {
            Some(last) => (t_start_epoch_ms as i64 - last as i64) * 1000,
            None => 0,
        }
    }

    /// Advance to the earliest multiple of `freq` strictly greater than
    /// `t_end_epoch_ms`, and record `t_start_epoch_ms` as the new `last`.
    pub fn advance_on_success(&mut self, t_start_epoch_ms: u64, t_end_epoch_ms: u64) {
        let freq_ms = self.freq_ms();
        self.next_epoch_ms = (t_end_epoch_ms / freq_ms + 1) * freq_ms;
        self.last_epoch_ms = Some(t_start_epoch_ms);
    }

    /// Push the deadline back by one period without touching `last`.
    pub fn advance_on_failure(&mut self) {
        self.next_epoch_ms += self.freq_ms();
    }
}

/// Merge the module config body into per-job configs for a multi-job
/// module, backfilling any of [`REQUIRED_KEYS`] a job is missing from
/// `defaults`. `defaults` must already contain all three required keys.
pub fn backfill_required_keys(job_value: &Value, defaults: &JobConfig) -> JobConfig {
    let update_every = job_value
        .get("update_every")
        .and_then(Value::as_i64)
        .filter(|v| *v > 0)
        .map(|v| v as u64)
        .unwrap_or(defaults.update_every);
    let priority = job_value
        .get("priority")
        .and_then(Value::as_i64)
        .unwrap_or(defaults.priority);
    let retries = job_value
        .get("retries")
        .and_then(Value::as_i64)
        .filter(|v| *v >= 0)
        .map(|v| v as u32)
        .unwrap_or(defaults.retries);

    let mut extra = job_value.clone();
    if let Some(map) = extra.as_mapping_mut() {
        for key in REQUIRED_KEYS {
            map.shift_remove(key);
        }
    } else {
        extra = Value::mapping();
    }

    JobConfig {
        update_every,
        priority,
        retries,
        extra,
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
