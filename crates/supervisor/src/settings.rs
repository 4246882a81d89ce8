// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment & Settings (SPEC_FULL.md §4.1): resolves the modules
//! directory, config directory, default update period, and CLI-derived
//! flags, then folds in `python.d.conf` to produce the frozen process-wide
//! configuration every later stage consumes. Nothing here is
//! collector-specific, and nothing here mutates once [`Settings::resolve`]
//! returns.

use chartsup_core::{BaseConfig, ModuleName, Value};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_CONFIG_DIR: &str = "/etc/netdata/";
const COLLECTOR_TREE_RELATIVE: &str = "python.d";
const PLUGIN_SUFFIX: &str = ".plugin";
const PLUGIN_CONF_FILENAME: &str = "python.d.conf";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine the running binary's own path: {0}")]
    NoCurrentExe(std::io::Error),
}

/// Frozen, process-wide configuration derived from argv and the
/// environment. Constructed once before any job exists (SPEC_FULL.md §5,
/// "Shared-resource policy").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub modules_dir: PathBuf,
    pub config_dir: PathBuf,
    pub update_every_default: u64,
    pub program: String,
    pub selection: Vec<ModuleName>,
    pub debug: bool,
    pub override_update_every: Option<u64>,
}

impl Settings {
    /// Resolve settings from the real process environment and argv. `argv`
    /// excludes the program name (i.e. `std::env::args().skip(1)`).
    pub fn resolve(argv: &[String]) -> Result<Self, SettingsError> {
        let modules_dir = modules_dir()?;
        let config_dir = config_dir();
        let update_every_default = update_every_default();
        let program = program_name()?;
        let ParsedArgs {
            selection,
            debug,
            override_update_every,
        } = parse_args(argv, &modules_dir);

        Ok(Self {
            modules_dir,
            config_dir,
            update_every_default,
            program,
            selection,
            debug,
            override_update_every,
        })
    }

    /// Path to the plugin-wide `python.d.conf`.
    pub fn plugin_conf_path(&self) -> PathBuf {
        self.config_dir.join(PLUGIN_CONF_FILENAME)
    }

    /// `update_every` that a job should use once base-config overrides are
    /// resolved: the CLI's positive-integer override, but only when both
    /// the debug flag and the override are present (SPEC_FULL.md §8,
    /// "Boundary behavior").
    pub fn effective_override_update_every(&self) -> Option<u64> {
        if self.debug {
            self.override_update_every
        } else {
            None
        }
    }
}

fn modules_dir() -> Result<PathBuf, SettingsError> {
    let base = match env::var("NETDATA_PLUGINS_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_exe()
            .map_err(SettingsError::NoCurrentExe)?
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    Ok(with_trailing_separator(base.join(COLLECTOR_TREE_RELATIVE)))
}

fn config_dir() -> PathBuf {
    let dir = env::var("NETDATA_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    with_trailing_separator(PathBuf::from(dir))
}

fn with_trailing_separator(path: PathBuf) -> PathBuf {
    let mut s = path.to_string_lossy().into_owned();
    if !s.ends_with(std::path::MAIN_SEPARATOR) {
        s.push(std::path::MAIN_SEPARATOR);
    }
    PathBuf::from(s)
}

fn update_every_default() -> u64 {
    env::var("NETDATA_UPDATE_EVERY")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(1)
}

fn program_name() -> Result<String, SettingsError> {
    let exe = env::current_exe().map_err(SettingsError::NoCurrentExe)?;
    let basename = exe
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "chartsupd".to_string());
    Ok(basename
        .strip_suffix(PLUGIN_SUFFIX)
        .unwrap_or(&basename)
        .to_string())
}

struct ParsedArgs {
    selection: Vec<ModuleName>,
    debug: bool,
    override_update_every: Option<u64>,
}

/// Interpret positional argv tokens per SPEC_FULL.md §4.1. `modules_dir` is
/// consulted only to recognize a token that names an existing collector
/// filename; no other filesystem I/O happens here.
fn parse_args(tokens: &[String], modules_dir: &Path) -> ParsedArgs {
    let mut selection = Vec::new();
    let mut debug = false;
    let mut override_update_every = None;

    for token in tokens {
        match token.as_str() {
            "check" => {}
            "debug" | "all" => debug = true,
            other => {
                if modules_dir.join(other).is_file() {
                    if let Some(name) = ModuleName::from_filename(other) {
                        selection.push(name);
                        debug = true;
                    }
                } else if let Ok(value) = other.parse::<i64>() {
                    if value > 0 {
                        override_update_every = Some(value as u64);
                    }
                }
            }
        }
    }

    ParsedArgs {
        selection,
        debug,
        override_update_every,
    }
}

/// What the plugin-wide config file means for startup: either proceed with
/// a (possibly updated) base configuration and disable list, or stop
/// voluntarily.
#[derive(Debug, Clone, PartialEq)]
pub enum PluginDisposition {
    Proceed {
        base: BaseConfig,
        disabled: Vec<ModuleName>,
        debug: bool,
    },
    VoluntaryDisable,
}

/// Fold `python.d.conf` into the base configuration (SPEC_FULL.md §4.1).
/// A missing or unparsable file is treated as an empty mapping — proceed
/// with defaults, the same "recoverable, not an error" policy the Config
/// Loader documents (SPEC_FULL.md §4.3).
pub fn apply_plugin_conf(settings: &Settings) -> PluginDisposition {
    let overrides =
        chartsup_core::load_yaml_file(&settings.plugin_conf_path()).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "no usable python.d.conf, proceeding with defaults");
            Value::mapping()
        });

    if overrides.get("enabled").and_then(Value::as_bool) == Some(false) {
        return PluginDisposition::VoluntaryDisable;
    }

    let mut base = BaseConfig::default();
    base.apply_overrides(&overrides);

    let mut debug = settings.debug;
    if overrides.get("debug").and_then(Value::as_bool) == Some(true) {
        debug = true;
    }

    let mut disabled = Vec::new();
    if let Some(mapping) = overrides.as_mapping() {
        for (key, value) in mapping {
            if matches!(key.as_str(), "enabled" | "debug" | "update_every" | "priority" | "retries") {
                continue;
            }
            if value.as_bool() == Some(false) {
                disabled.push(ModuleName::new(key.clone()));
            }
        }
    }

    PluginDisposition::Proceed {
        base,
        disabled,
        debug,
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
