// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! `chartsupd`: the metrics-collection plugin supervisor (SPEC_FULL.md
//! §4.11 "Process wiring"). Loads collector modules, materializes their
//! configuration, runs each job's check/create lifecycle, then schedules
//! `update()` calls forever until every job has been dropped.

mod factory;
mod lifecycle;
mod logging;
mod materializer;
mod protocol;
mod scheduler;
mod settings;

use chartsup_collectors::{builtins, Module, ModuleLoader, StaticRegistry};
use chartsup_core::{BaseConfig, Clock, SystemClock};
use factory::BuiltJob;
use settings::{apply_plugin_conf, PluginDisposition, Settings};
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("chartsupd {VERSION}");
        return ExitCode::SUCCESS;
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let settings = match Settings::resolve(&args) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("chartsupd: {err}");
            return ExitCode::FAILURE;
        }
    };

    let (base, disabled, debug) = match apply_plugin_conf(&settings) {
        PluginDisposition::VoluntaryDisable => {
            print!("{}", protocol::DISABLE_LINE);
            return ExitCode::SUCCESS;
        }
        PluginDisposition::Proceed {
            base,
            disabled,
            debug,
        } => (base, disabled, debug),
    };

    logging::init(&settings.program, debug);

    let mut registry = StaticRegistry::new();
    builtins::register_all(&mut registry);
    let loader = ModuleLoader::new(registry);

    let modules = match loader.load(&settings.modules_dir, &settings.selection, &disabled) {
        Ok(modules) => modules,
        Err(err) => return disable_and_exit(&format!("failed to load collector modules: {err}")),
    };

    let clock = SystemClock;
    let jobs = build_all_jobs(&modules, &settings, &base, &clock);

    let jobs = lifecycle::run_check_phase(jobs);
    if jobs.is_empty() {
        return disable_and_exit("no collector job passed its check() phase");
    }

    let jobs = lifecycle::run_create_phase(jobs);
    if jobs.is_empty() {
        return disable_and_exit("no collector job passed its create() phase");
    }

    match scheduler::run_forever(jobs, &clock) {
        scheduler::SupervisorHalt::NoJobsRemaining => {
            disable_and_exit("every collector job has been disabled")
        }
    }
}

fn build_all_jobs(
    modules: &[std::sync::Arc<dyn Module>],
    settings: &Settings,
    base: &BaseConfig,
    clock: &impl Clock,
) -> Vec<BuiltJob> {
    let mut jobs = Vec::new();
    for module in modules {
        let file_value = materializer::load_module_config(&settings.config_dir, module.name());
        let config = materializer::materialize(module.as_ref(), file_value, base);
        jobs.extend(factory::build_jobs(
            module.as_ref(),
            &config,
            settings,
            clock.epoch_ms(),
        ));
    }
    jobs
}

fn disable_and_exit(reason: &str) -> ExitCode {
    fatal!("{reason}");
    print!("{}", protocol::DISABLE_LINE);
    ExitCode::FAILURE
}

fn print_usage() {
    println!("usage: chartsupd [update-every] [debug|all|<module-filename>]...");
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
