// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! An in-memory `Module`/`Collector` test double: scripted outcomes,
//! recorded calls. Used by the supervisor crate's lifecycle and scheduler
//! tests in place of a real module, the way the teacher wires
//! `FakeAgentAdapter` into its dispatcher tests.

use crate::collector::{Collector, JobConstructError, Module};
use crate::outcome::OpOutcome;
use chartsup_core::value::Scalar;
use chartsup_core::{JobConfig, ModuleName};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// A single recorded invocation of one of the three operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Check,
    Create,
    Update(i64),
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    check_script: VecDeque<OpOutcome>,
    create_script: VecDeque<OpOutcome>,
    update_script: VecDeque<OpOutcome>,
    attributes: Vec<(String, Scalar)>,
}

/// Shared handle used both as the [`Module`] and to script/inspect the jobs
/// it produces. Every job built from one `FakeModule` shares the same
/// outcome scripts and call log, which is normally fine since tests build
/// one job per fake module.
#[derive(Clone)]
pub struct FakeModule {
    name: ModuleName,
    state: Arc<Mutex<State>>,
}

impl FakeModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ModuleName::new(name.into()),
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    pub fn with_attribute(self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.state.lock().attributes.push((key.into(), value.into()));
        self
    }

    pub fn push_check(&self, outcome: OpOutcome) {
        self.state.lock().check_script.push_back(outcome);
    }

    pub fn push_create(&self, outcome: OpOutcome) {
        self.state.lock().create_script.push_back(outcome);
    }

    pub fn push_update(&self, outcome: OpOutcome) {
        self.state.lock().update_script.push_back(outcome);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().calls.len()
    }
}

impl Module for FakeModule {
    fn name(&self) -> &ModuleName {
        &self.name
    }

    fn attribute(&self, key: &str) -> Option<Scalar> {
        self.state
            .lock()
            .attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn make_job(
        &self,
        _config: &JobConfig,
        _job_name: Option<&str>,
    ) -> Result<Box<dyn Collector>, JobConstructError> {
        Ok(Box::new(FakeCollector {
            state: self.state.clone(),
        }))
    }
}

/// A job built from a [`FakeModule`]: plays back the scripted outcome for
/// each operation (or [`OpOutcome::Success`] once its script runs dry) and
/// records every call it receives.
pub struct FakeCollector {
    state: Arc<Mutex<State>>,
}

impl Collector for FakeCollector {
    fn check(&mut self) -> OpOutcome {
        let mut state = self.state.lock();
        state.calls.push(Call::Check);
        state.check_script.pop_front().unwrap_or(OpOutcome::Success)
    }

    fn create(&mut self) -> OpOutcome {
        let mut state = self.state.lock();
        state.calls.push(Call::Create);
        state.create_script.pop_front().unwrap_or(OpOutcome::Success)
    }

    fn update(&mut self, since_last_micros: i64) -> OpOutcome {
        let mut state = self.state.lock();
        state.calls.push(Call::Update(since_last_micros));
        state.update_script.pop_front().unwrap_or(OpOutcome::Success)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
