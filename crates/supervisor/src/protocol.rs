// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire Protocol (SPEC_FULL.md §4.9, §6): the exact bytes the supervisor
//! itself writes to stdout. Centralized here so the handful of call sites
//! that need to emit these lines (`main`'s fatal-exit path, the lifecycle
//! driver's create phase, the scheduler's update phase) can't drift from
//! one another or from the host's expectations.

/// The literal line written on any fatal exit.
pub const DISABLE_LINE: &str = "DISABLE\n";

/// The self-monitoring chart declaration emitted once after a job's
/// successful `create()`.
pub fn runtime_chart_lines(chart_name: &str, freq_secs: u64) -> String {
    format!(
        "CHART netdata.plugin_pythond_{chart_name} '' 'Execution time for {chart_name} plugin' 'milliseconds / run' python.d netdata.plugin_python area 145000 {freq_secs}\n\
         DIMENSION run_time 'run time' absolute 1 1\n\n"
    )
}

/// The self-monitoring runtime frame emitted after a job's successful
/// `update()`. `elapsed_ms` is `(t_end - t_start) * 1000` truncated to an
/// integer.
pub fn runtime_update_lines(chart_name: &str, since_last_micros: i64, elapsed_ms: i64) -> String {
    format!(
        "BEGIN netdata.plugin_pythond_{chart_name} {since_last_micros}\n\
         SET run_time = {elapsed_ms}\n\
         END\n"
    )
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
