// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The statically-linked collector registry (SPEC_FULL.md §9, variant (a)).
//!
//! A binary built against this crate registers each built-in module's
//! constructor once at startup; the loader looks modules up by name as it
//! walks the modules directory, rather than dynamically loading code at
//! runtime (`unsafe_code = "forbid"` rules out `.so` loading — see
//! SPEC_FULL.md §9 Open Questions).

use crate::collector::Module;
use chartsup_core::ModuleName;
use std::collections::HashMap;
use std::sync::Arc;

/// Constructs a fresh [`Module`] instance for one registered name.
pub type ModuleFactory = fn(&ModuleName) -> Arc<dyn Module>;

/// A name → constructor table for in-process collector modules.
#[derive(Default)]
pub struct StaticRegistry {
    factories: HashMap<String, ModuleFactory>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module factory under `name`. Re-registering the same name
    /// replaces the previous factory.
    pub fn register(&mut self, name: &str, factory: ModuleFactory) {
        self.factories.insert(name.to_string(), factory);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Construct the named module, or `None` if nothing is registered under
    /// that name.
    pub fn load(&self, name: &ModuleName) -> Option<Arc<dyn Module>> {
        let factory = self.factories.get(name.as_str())?;
        Some(factory(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
