// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `Collector`/`Module` abstraction collector modules are loaded
//! through (SPEC_FULL.md §9).

use crate::outcome::OpOutcome;
use chartsup_core::value::Scalar;
use chartsup_core::{JobConfig, ModuleName};
use std::fmt;
use thiserror::Error;

/// A live job instance produced by a [`Module`]'s factory. The supervisor
/// drives a job purely through this trait; it never knows or cares
/// whether the implementation is statically linked or a subprocess.
pub trait Collector: Send {
    /// Probe prerequisites. `true` = viable.
    fn check(&mut self) -> OpOutcome;

    /// Emit module-specific chart-definition lines. `true` = success.
    fn create(&mut self) -> OpOutcome;

    /// Produce one round of metric lines. `true` = success.
    fn update(&mut self, since_last_micros: i64) -> OpOutcome;
}

#[derive(Debug, Error)]
pub enum JobConstructError {
    #[error("{0}")]
    Message(String),
}

/// An opaque, loaded collector module (SPEC_FULL.md §3).
pub trait Module: Send + Sync {
    /// The module's name, derived from its filename.
    fn name(&self) -> &ModuleName;

    /// Look up a module-declared attribute (used as the second-priority
    /// default source in SPEC_FULL.md §4.5).
    fn attribute(&self, key: &str) -> Option<Scalar>;

    /// Construct one job instance from its materialized configuration.
    /// `job_name` is `None` for a single-job module.
    fn make_job(
        &self,
        config: &JobConfig,
        job_name: Option<&str>,
    ) -> Result<Box<dyn Collector>, JobConstructError>;
}

impl fmt::Debug for dyn Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module").field("name", self.name()).finish()
    }
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod tests;
