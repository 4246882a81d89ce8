// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config Materializer (SPEC_FULL.md §4.5): turns one loaded module plus
//! its (possibly absent) `.conf` file into a [`ModuleConfig`] — a mapping
//! from job name to a fully materialized [`JobConfig`].

use chartsup_collectors::Module;
use chartsup_core::job::backfill_required_keys;
use chartsup_core::value::Scalar;
use chartsup_core::{BaseConfig, ConfigLoadError, JobConfig, ModuleConfig, ModuleName, Value};
use std::path::{Path, PathBuf};

const PYTHON_D_SUBDIR: &str = "python.d";

/// Where a module's per-module `.conf` file lives, given the plugin's
/// config directory (SPEC_FULL.md §6).
pub fn module_config_path(config_dir: &Path, module_name: &ModuleName) -> PathBuf {
    config_dir
        .join(PYTHON_D_SUBDIR)
        .join(format!("{}.conf", module_name.as_str()))
}

/// Read a module's `.conf` file, if any. A missing file is informational
/// (SPEC_FULL.md §7, job-phase-failure subcategory 4); a file that exists
/// but fails to parse is a logged error — both cases proceed as if no file
/// were found.
pub fn load_module_config(config_dir: &Path, module_name: &ModuleName) -> Option<Value> {
    let path = module_config_path(config_dir, module_name);
    match chartsup_core::load_yaml_file(&path) {
        Ok(value) => Some(value),
        Err(ConfigLoadError::Io { .. }) => {
            tracing::info!(module = %module_name, "no config file for module, using defaults");
            None
        }
        Err(err @ ConfigLoadError::Parse { .. }) => {
            tracing::error!(module = %module_name, error = %err, "failed to parse module config, using defaults");
            None
        }
    }
}

/// Materialize `module`'s `ModuleConfig` from its (optional) file contents
/// and the process-wide base configuration.
pub fn materialize(module: &dyn Module, file_value: Option<Value>, base: &BaseConfig) -> ModuleConfig {
    let mut file_value = file_value.unwrap_or_else(Value::mapping);

    let update_every =
        resolve_required(&mut file_value, "update_every", module, base.update_every as i64, |v| v > 0) as u64;
    let priority = resolve_required(&mut file_value, "priority", module, base.priority, |_| true);
    let retries =
        resolve_required(&mut file_value, "retries", module, base.retries as i64, |v| v >= 0) as u32;

    let defaults = JobConfig::new(update_every, priority, retries);

    let mapping = file_value.as_mapping().cloned().unwrap_or_default();
    let is_multi_job = mapping.values().any(Value::is_mapping);

    let mut out = ModuleConfig::new();
    if is_multi_job {
        for (job_name, job_value) in mapping {
            if job_value.is_mapping() {
                out.insert(Some(job_name), backfill_required_keys(&job_value, &defaults));
            }
        }
    } else {
        let body = defaults.clone().with_extra(Value::Mapping(mapping));
        out.insert(None, body);
    }
    out
}

/// Resolve one of the three required keys with the precedence chain from
/// SPEC_FULL.md §4.5: (1) the file's top-level value, consumed regardless
/// of whether it coerces; (2) the module's own attribute of the same name;
/// (3) the supplied base-config value.
fn resolve_required(
    file_value: &mut Value,
    key: &str,
    module: &dyn Module,
    base_value: i64,
    valid: impl Fn(i64) -> bool,
) -> i64 {
    let from_file = file_value
        .take(key)
        .as_ref()
        .and_then(Value::as_i64)
        .filter(|v| valid(*v));
    if let Some(v) = from_file {
        return v;
    }
    let from_attribute = module
        .attribute(key)
        .as_ref()
        .and_then(Scalar::as_i64)
        .filter(|v| valid(*v));
    if let Some(v) = from_attribute {
        return v;
    }
    base_value
}

#[cfg(test)]
#[path = "materializer_tests.rs"]
mod tests;
