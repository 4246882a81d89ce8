// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A minimal statically-linked collector: one chart, one dimension,
//! tracking how long the collector itself has been running. Serves as the
//! reference implementation for in-process [`Module`]/[`Collector`]
//! authors, and as a fixture for the registry and lifecycle tests.

use crate::collector::{Collector, JobConstructError, Module};
use crate::outcome::OpOutcome;
use chartsup_core::value::Scalar;
use chartsup_core::{JobConfig, ModuleName};
use std::sync::Arc;
use std::time::Instant;

pub const NAME: &str = "uptime";

pub struct UptimeModule {
    name: ModuleName,
}

impl UptimeModule {
    pub fn new() -> Arc<dyn Module> {
        Self::new_named(&ModuleName::new(NAME))
    }

    /// Construct under an arbitrary name, for registries that alias this
    /// module under something other than [`NAME`].
    pub fn new_named(name: &ModuleName) -> Arc<dyn Module> {
        Arc::new(Self { name: name.clone() })
    }
}

impl Module for UptimeModule {
    fn name(&self) -> &ModuleName {
        &self.name
    }

    fn attribute(&self, _key: &str) -> Option<Scalar> {
        None
    }

    fn make_job(
        &self,
        _config: &JobConfig,
        _job_name: Option<&str>,
    ) -> Result<Box<dyn Collector>, JobConstructError> {
        Ok(Box::new(UptimeCollector {
            started_at: None,
        }))
    }
}

struct UptimeCollector {
    started_at: Option<Instant>,
}

impl Collector for UptimeCollector {
    fn check(&mut self) -> OpOutcome {
        OpOutcome::Success
    }

    fn create(&mut self) -> OpOutcome {
        self.started_at = Some(Instant::now());
        println!(
            "CHART pythond.uptime '' 'Collector process uptime' 'seconds' pythond netdata.plugin_python line 145000 1"
        );
        println!("DIMENSION seconds 'seconds' absolute 1 1");
        OpOutcome::Success
    }

    fn update(&mut self, since_last_micros: i64) -> OpOutcome {
        let Some(started_at) = self.started_at else {
            return OpOutcome::Declined;
        };
        let seconds = started_at.elapsed().as_secs();
        println!("BEGIN pythond.uptime {since_last_micros}");
        println!("SET seconds = {seconds}");
        println!("END");
        OpOutcome::Success
    }
}

#[cfg(test)]
#[path = "uptime_tests.rs"]
mod tests;
