// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collector modules linked directly into the supervisor binary.

pub mod uptime;

use crate::registry::StaticRegistry;

/// Register every built-in module with `registry`.
pub fn register_all(registry: &mut StaticRegistry) {
    registry.register(uptime::NAME, uptime::UptimeModule::new_named);
}
