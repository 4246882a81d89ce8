// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reads a YAML document from a filesystem path into the [`Value`] tree.
//!
//! Per SPEC_FULL.md §4.3, both IO and parse failure are reported the same
//! way to callers that only care "is there usable config or not" — this
//! module surfaces the distinction via [`ConfigLoadError`] for logging, but
//! every caller in this crate family treats both variants identically
//! (proceed with defaults, having logged why).

use crate::value::Value;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path} as YAML: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Read and parse a YAML document at `path`.
pub fn load_yaml_file(path: &Path) -> Result<Value, ConfigLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let raw: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|source| ConfigLoadError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Value::from(raw))
}

#[cfg(test)]
#[path = "config_loader_tests.rs"]
mod tests;
