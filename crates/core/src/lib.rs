// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! chartsup-core: data model and configuration primitives shared by the
//! collector loader and the supervisor's lifecycle/scheduler engine.

pub mod clock;
pub mod config_loader;
pub mod id;
pub mod job;
pub mod settings;
pub mod value;

pub use clock::{Clock, FakeClock, SystemClock};
pub use config_loader::{load_yaml_file, ConfigLoadError};
pub use id::ModuleName;
pub use job::{JobConfig, ModuleConfig, Timetable, REQUIRED_KEYS};
pub use settings::BaseConfig;
pub use value::{Scalar, Value};
